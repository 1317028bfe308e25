mod common;

mod tests {
    use myrtio_light_selector::{
        Animation, AnimationGroup, ConfigError, Duration, SurfaceId,
        color::{BLUE, GREEN, RED, Rgb, WHITE},
    };

    use super::common::{STRIP_LEN, at, surfaces};

    const PALETTE: [Rgb; 3] = [RED, GREEN, BLUE];
    const SPEED: Duration = Duration::from_millis(10);

    fn cycle_group() -> AnimationGroup {
        AnimationGroup::new([
            Animation::solid(SurfaceId::Board, WHITE),
            Animation::color_cycle(SurfaceId::Strip, SPEED, &PALETTE),
        ])
        .unwrap()
    }

    #[test]
    fn test_synced_group_restarts_at_phase_zero() {
        let mut surfaces = surfaces();
        let mut group = cycle_group().synced();

        group.activate();
        for tick in 0..5 {
            group.advance(at(tick * 10), &mut surfaces).unwrap();
        }
        assert_eq!(group.members()[1].phase(), 5);

        group.activate();
        assert!(group.members().iter().all(|member| member.phase() == 0));

        group.advance(at(43), &mut surfaces).unwrap();
        assert_eq!(group.members()[1].phase(), 1);
        assert_eq!(surfaces.strip.frame(), [RED; STRIP_LEN]);
        assert_eq!(surfaces.board.frame(), [WHITE; 4]);
    }

    #[test]
    fn test_unsynced_group_resumes_infinite_members() {
        let mut surfaces = surfaces();
        let mut group = cycle_group();

        group.activate();
        for tick in 0..2 {
            group.advance(at(tick * 10), &mut surfaces).unwrap();
        }

        group.activate();
        // Resumes with the third color right away; the solid redraws
        assert!(group.advance(at(12), &mut surfaces).unwrap());
        assert_eq!(surfaces.strip.frame(), [BLUE; STRIP_LEN]);
        assert_eq!(group.members()[0].phase(), 1);
        assert_eq!(group.members()[1].phase(), 3);
    }

    #[test]
    fn test_group_with_infinite_member_never_completes() {
        let mut surfaces = surfaces();
        let mut group = cycle_group();

        group.activate();
        for tick in 0..10 {
            group.advance(at(tick * 10), &mut surfaces).unwrap();
        }
        assert!(group.members()[0].is_complete());
        assert!(!group.is_complete());
    }

    #[test]
    fn test_group_of_finite_members_completes() {
        let mut surfaces = surfaces();
        let mut group = AnimationGroup::new([
            Animation::solid(SurfaceId::Board, WHITE),
            Animation::comet(SurfaceId::Strip, SPEED, RED, 1).once(),
        ])
        .unwrap();

        group.activate();
        for tick in 0..STRIP_LEN as u64 {
            assert!(!group.is_complete());
            group.advance(at(tick * 10), &mut surfaces).unwrap();
        }
        assert!(group.is_complete());
    }

    #[test]
    fn test_group_validation() {
        let surfaces = surfaces();

        let empty = AnimationGroup::new(std::iter::empty::<Animation>()).unwrap();
        assert_eq!(empty.validate(&surfaces), Err(ConfigError::EmptyGroup));

        let duplicate = AnimationGroup::new([
            Animation::solid(SurfaceId::Strip, WHITE),
            Animation::solid(SurfaceId::Strip, RED),
        ])
        .unwrap();
        assert_eq!(
            duplicate.validate(&surfaces),
            Err(ConfigError::DuplicateSurface(SurfaceId::Strip))
        );

        assert!(cycle_group().validate(&surfaces).is_ok());
    }

    #[test]
    fn test_group_capacity() {
        let result = AnimationGroup::new([
            Animation::solid(SurfaceId::Board, WHITE),
            Animation::solid(SurfaceId::Strip, WHITE),
            Animation::solid(SurfaceId::Strip, RED),
        ]);
        assert_eq!(result.err(), Some(ConfigError::CapacityExceeded));
    }
}
