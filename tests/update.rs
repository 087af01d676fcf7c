mod tests {
    use glass_board::{
        Board, BoardConfig, Colors, GlassUpdate, GlassWiring, Port, QueueFull, UnknownGlass,
        UpdateProcessor, UpdateQueue, UpdateReport, apply_update,
    };

    const WIRING: [GlassWiring; 2] = [GlassWiring::new(Port::A, 0), GlassWiring::new(Port::B, 3)];

    fn board() -> Board<4> {
        Board::from_config(&BoardConfig {
            wiring: &WIRING,
            colors: Colors::BLACK,
            glass_status: false,
        })
        .unwrap()
    }

    #[test]
    fn test_queue_is_fifo() {
        let queue = UpdateQueue::<4>::new();
        let sender = queue.sender();
        assert!(queue.is_empty());

        sender.try_send_status(0, true).unwrap();
        sender.try_send_colors(1, Colors::new(1, 2, 3)).unwrap();
        assert_eq!(queue.len(), 2);

        let receiver = queue.receiver();
        assert_eq!(receiver.try_receive(), Some(GlassUpdate::status(0, true)));
        assert_eq!(
            receiver.try_receive(),
            Some(GlassUpdate::colors(1, Colors::new(1, 2, 3)))
        );
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_queue_full_returns_update() {
        let queue = UpdateQueue::<1>::new();
        queue.try_send(GlassUpdate::status(0, true)).unwrap();
        let rejected = GlassUpdate::status(1, true);
        assert_eq!(queue.try_send(rejected), Err(QueueFull(rejected)));
    }

    #[test]
    fn test_process_pending_applies_in_order() {
        let queue = UpdateQueue::<8>::new();
        let sender = queue.sender();
        let mut processor = UpdateProcessor::new(queue.receiver());
        let mut board = board();

        sender.try_send_colors(0, Colors::new(1, 1, 1)).unwrap();
        sender.try_send_colors(0, Colors::new(2, 2, 2)).unwrap();
        sender.try_send_status(1, true).unwrap();

        let report = processor.process_pending(&mut board);
        assert_eq!(
            report,
            UpdateReport {
                applied: 3,
                unknown: 0,
                status_changed: true,
            }
        );
        assert!(report.has_changes());
        assert_eq!(board.get(0).unwrap().colors(), Colors::new(2, 2, 2));
        assert!(board.get(1).unwrap().glass_status());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_process_pending_counts_unknown() {
        let queue = UpdateQueue::<4>::new();
        let sender = queue.sender();
        let mut processor = UpdateProcessor::new(queue.receiver());
        let mut board = board();

        sender.try_send_status(5, true).unwrap();
        sender.try_send_colors(1, Colors::new(7, 7, 7)).unwrap();

        let report = processor.process_pending(&mut board);
        assert_eq!(report.applied, 1);
        assert_eq!(report.unknown, 1);
        assert!(!report.status_changed);
        assert_eq!(board.get(1).unwrap().colors(), Colors::new(7, 7, 7));
    }

    #[test]
    fn test_process_pending_same_status_is_not_a_flip() {
        let queue = UpdateQueue::<4>::new();
        let mut processor = UpdateProcessor::new(queue.receiver());
        let mut board = board();

        queue.try_send(GlassUpdate::status(0, false)).unwrap();
        let report = processor.process_pending(&mut board);
        assert_eq!(report.applied, 1);
        assert!(!report.status_changed);

        let report = processor.process_pending(&mut board);
        assert_eq!(report, UpdateReport::default());
        assert!(!report.has_changes());
    }

    #[test]
    fn test_apply_update_wiring() {
        let mut board = board();
        apply_update(&mut board, GlassUpdate::wiring(0, GlassWiring::new(Port::B, 6))).unwrap();
        assert_eq!(board.position_of(Port::B, 6), Some(0));
        assert_eq!(
            apply_update(&mut board, GlassUpdate::status(9, true)),
            Err(UnknownGlass(9))
        );
    }
}
