use super::*;
use crate::illustrations::sphere::config::LineConfig;

fn model(num_points: usize) -> SphereModel {
    SphereModel::new(SphereConfig {
        num_points,
        ..SphereConfig::default()
    })
}

fn state_counts(m: &SphereModel) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for line in m.lines() {
        match line.state {
            LineState::Appearing => counts.0 += 1,
            LineState::Active => counts.1 += 1,
            LineState::Disappearing => counts.2 += 1,
        }
    }
    counts
}

#[test]
fn golden_angle_points_lie_on_the_sphere() {
    let pts = golden_angle_points(45, 400.0);
    assert_eq!(pts.len(), 45);
    for p in &pts {
        assert!((p.length() - 400.0).abs() < 1e-9);
    }
    assert!(pts[0].approx_eq(Point3D::new(0.0, 400.0, 0.0), 1e-9));
    assert!((pts[44].y + 400.0).abs() < 1e-9);
}

#[test]
fn single_point_sits_on_the_equator() {
    let pts = golden_angle_points(1, 100.0);
    assert_eq!(pts, vec![Point3D::new(100.0, 0.0, 0.0)]);
    assert!(golden_angle_points(0, 100.0).is_empty());
}

#[test]
fn random_points_are_on_the_surface() {
    let mut rng = Rng64::new(7);
    for _ in 0..200 {
        let p = random_sphere_point(&mut rng, 250.0);
        assert!((p.length() - 250.0).abs() < 1e-9);
    }
}

#[test]
fn initialize_seeds_active_lines_with_sequential_ids() {
    let mut m = model(5);
    assert!(!m.is_initialized());
    m.initialize(42.0);
    assert!(m.is_initialized());
    let ids: Vec<u64> = m.lines().map(|l| l.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    for line in m.lines() {
        assert_eq!(line.state, LineState::Active);
        assert_eq!(line.opacity, 1.0);
        assert_eq!(line.created_at, 42.0);
    }
}

#[test]
fn new_line_fades_in_then_settles() {
    let mut m = model(0);
    m.initialize(0.0);
    m.add_new_line(100.0);
    let id = m.lines().next().unwrap().id;
    assert_eq!(id, 0);

    m.update_line_opacities(100.0);
    let l = *m.line(id).unwrap();
    assert_eq!(l.state, LineState::Appearing);
    assert_eq!((l.opacity, l.length_progress), (0.0, 0.5));

    m.update_line_opacities(225.0);
    let l = *m.line(id).unwrap();
    assert!((l.opacity - 0.5).abs() < 1e-12);
    assert!((l.length_progress - 0.75).abs() < 1e-12);

    m.update_line_opacities(350.0);
    let l = *m.line(id).unwrap();
    assert_eq!(l.state, LineState::Active);
    assert_eq!((l.opacity, l.length_progress), (1.0, 1.0));
    assert_eq!(l.fade_start_time, None);
}

#[test]
fn disappearing_line_is_removed_with_its_point() {
    let mut m = model(3);
    m.initialize(0.0);
    assert!(m.mark_disappearing(1, 1_000.0));
    assert!(!m.mark_disappearing(1, 1_010.0));

    m.update_line_opacities(1_125.0);
    let l = *m.line(1).unwrap();
    assert!((l.opacity - 0.5).abs() < 1e-12);
    assert!((l.length_progress - 0.75).abs() < 1e-12);
    assert_eq!(m.len(), 3);

    m.update_line_opacities(1_250.0);
    assert_eq!(m.len(), 2);
    assert!(m.line(1).is_none());
    assert!(m.original_points().all(|(id, _)| id != 1));
    assert_eq!(m.get_points_for_render().len(), 2);
}

#[test]
fn young_lines_are_never_chosen_for_removal() {
    let mut m = model(45);
    m.initialize(0.0);
    m.remove_random_line(400.0);
    assert_eq!(state_counts(&m).2, 0);
    m.remove_random_line(600.0);
    assert_eq!(state_counts(&m).2, 1);
}

#[test]
fn add_respects_the_cap_and_remove_the_floor() {
    let mut m = SphereModel::new(SphereConfig {
        num_points: 4,
        line_config: LineConfig {
            min_lines: 4,
            max_lines: 4,
            ..LineConfig::default()
        },
        ..SphereConfig::default()
    });
    m.initialize(0.0);
    m.add_new_line(1_000.0);
    assert_eq!(m.len(), 4);
    m.remove_random_line(5_000.0);
    assert_eq!(state_counts(&m), (0, 4, 0));
    // Each call re-arms its own task.
    assert_eq!(m.pending_tasks(), 2);
}

#[test]
fn population_stays_within_bounds_over_time() {
    let mut m = model(45);
    m.initialize(0.0);
    m.start_line_management(0.0);
    let lc = m.config().line_config.clone();

    let mut now = 0.0;
    let mut saw_add = false;
    let mut saw_remove = false;
    while now < 30_000.0 {
        now += 16.0;
        m.run_due_tasks(now);
        m.update_rotation_angles();
        m.update_line_opacities(now);
        let (appearing, active, disappearing) = state_counts(&m);
        assert!(appearing + active <= lc.max_lines);
        assert!(appearing + active >= lc.min_lines);
        saw_add |= appearing > 0;
        saw_remove |= disappearing > 0;
    }
    assert!(saw_add && saw_remove);
    assert_eq!(m.pending_tasks(), 2);

    m.stop_line_management();
    assert_eq!(m.pending_tasks(), 0);
}

#[test]
fn render_points_are_rotated_copies() {
    let mut m = SphereModel::new(SphereConfig {
        num_points: 1,
        radius: 100.0,
        rotation_speed: Rotation::new(0.0, std::f64::consts::FRAC_PI_2, 0.0),
        ..SphereConfig::default()
    });
    m.initialize(0.0);
    m.update_rotation_angles();
    let pts = m.get_points_for_render();
    assert_eq!(pts.len(), 1);
    assert!(pts[0].point.approx_eq(rotate_point(Point3D::new(100.0, 0.0, 0.0), m.rotation()), 1e-12));
    assert_eq!(pts[0].depth(), Some(pts[0].point.z));
    // The canonical point is untouched.
    assert_eq!(m.original_points().next().unwrap().1, Point3D::new(100.0, 0.0, 0.0));
}

#[test]
fn same_seed_replays_identically() {
    let run = || {
        let mut m = model(10);
        m.initialize(0.0);
        m.start_line_management(0.0);
        for step in 1..=500 {
            let now = step as f64 * 16.0;
            m.run_due_tasks(now);
            m.update_line_opacities(now);
        }
        m.get_points_for_render()
    };
    assert_eq!(run(), run());
}
