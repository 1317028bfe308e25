mod common;

mod tests {
    use myrtio_light_selector::{
        Animation, Instant, PixelSurface, Playable, SurfaceId, Surfaces, default_modes,
        color::{AMBER, GOLD, OFF, RED, WHITE},
        config::{
            BOARD_COMET_SPEED, BOARD_COMET_TAIL_LENGTH, BOARD_LED_COUNT, STRIP_COMET_SPEED,
            STRIP_LED_COUNT, board_brightness, strip_brightness,
        },
    };

    use super::common::RecordingDriver;

    fn device_surfaces() -> Surfaces<
        PixelSurface<RecordingDriver, BOARD_LED_COUNT>,
        PixelSurface<RecordingDriver, STRIP_LED_COUNT>,
    > {
        Surfaces::new(
            PixelSurface::new(RecordingDriver::default(), board_brightness()),
            PixelSurface::new(RecordingDriver::default(), strip_brightness()),
        )
    }

    #[test]
    fn test_default_modes_are_valid() {
        let surfaces = device_surfaces();
        let modes = default_modes().unwrap();

        assert_eq!(modes.len(), 4);
        assert!(modes.auto_clear());
        assert!(modes.validate(&surfaces).is_ok());
        match modes.item(1) {
            Some(Playable::Chain(chain)) => assert_eq!(chain.groups().len(), 3),
            _ => panic!("mode B is a comet chain"),
        }
    }

    #[test]
    fn test_default_brightness() {
        assert_eq!(board_brightness(), 191);
        assert_eq!(strip_brightness(), 128);
    }

    #[test]
    fn test_comet_mode_runs_three_traversals() {
        let mut surfaces = device_surfaces();
        let mut modes = default_modes().unwrap();
        let step = STRIP_COMET_SPEED.as_micros();

        modes.activate(1, &mut surfaces).unwrap();
        for tick in 0..3 * STRIP_LED_COUNT as u64 {
            modes
                .advance(Instant::from_micros(tick * step), &mut surfaces)
                .unwrap();
        }

        match modes.item(1) {
            Some(Playable::Chain(chain)) => assert!(chain.is_complete()),
            _ => panic!("mode B is a comet chain"),
        }
        assert_eq!(surfaces.strip.cells()[STRIP_LED_COUNT - 1], RED);
        assert_eq!(surfaces.board.frame(), [WHITE; BOARD_LED_COUNT]);
    }

    #[test]
    fn test_dim_mode() {
        let mut surfaces = device_surfaces();
        let mut modes = default_modes().unwrap();

        modes.activate(2, &mut surfaces).unwrap();
        modes.advance(Instant::from_millis(0), &mut surfaces).unwrap();
        assert_eq!(surfaces.strip.frame(), [AMBER; STRIP_LED_COUNT]);

        modes.activate(3, &mut surfaces).unwrap();
        modes.advance(Instant::from_millis(1), &mut surfaces).unwrap();
        assert_eq!(surfaces.board.frame(), [AMBER; BOARD_LED_COUNT]);
        assert_eq!(surfaces.strip.frame(), [OFF; STRIP_LED_COUNT]);
        // Brightness is applied on flush only
        assert_eq!(surfaces.board.driver().last[0].r, 191);
    }

    #[test]
    fn test_board_comet_fits_board() {
        let mut surfaces = device_surfaces();
        let mut comet = Animation::comet(
            SurfaceId::Board,
            BOARD_COMET_SPEED,
            GOLD,
            BOARD_COMET_TAIL_LENGTH,
        )
        .once();

        assert!(comet.validate(&surfaces).is_ok());

        let step = BOARD_COMET_SPEED.as_millis();
        for tick in 0..BOARD_LED_COUNT as u64 {
            comet
                .advance(Instant::from_millis(tick * step), &mut surfaces)
                .unwrap();
        }
        assert!(comet.is_complete());
        assert_eq!(surfaces.board.cells()[BOARD_LED_COUNT - 1], GOLD);
    }
}
