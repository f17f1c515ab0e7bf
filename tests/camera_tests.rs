// Host-side tests for the orbit camera, ray construction and mesh picking.

use bioscan_core::*;
use glam::{Mat4, Vec2, Vec3};

fn camera() -> OrbitCamera {
    let mut cam = OrbitCamera::new(&CameraParams::default(), 1.0);
    cam.set_aspect(800, 600);
    cam
}

#[test]
fn centre_ray_points_at_target() {
    let cam = camera();
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    let expected = (cam.target - cam.eye).normalize();
    assert!(ray.dir.dot(expected) > 0.9999, "{:?}", ray.dir);
    assert_eq!(ray.origin, cam.eye);
}

#[test]
fn projecting_a_ray_point_returns_its_ndc() {
    let cam = camera();
    let ndc = Vec2::new(0.3, -0.4);
    let p = cam.ray_from_ndc(ndc).at(4.0);
    let back = cam.project(p).expect("in front of the camera");
    assert!((back.x - ndc.x).abs() < 1e-3, "{back:?}");
    assert!((back.y - ndc.y).abs() < 1e-3, "{back:?}");
}

#[test]
fn screen_projection_uses_top_left_origin() {
    let cam = camera();
    let centre = cam
        .project_to_screen(cam.target, 800.0, 600.0)
        .expect("target is visible");
    assert!((centre - Vec2::new(400.0, 300.0)).length() < 0.5);
    assert!(cam.project(cam.eye + (cam.eye - cam.target)).is_none());
}

#[test]
fn orbit_is_damped_and_keeps_distance() {
    let mut cam = camera();
    let radius = cam.eye.distance(cam.target);
    cam.orbit(0.5, 0.0);
    cam.update(0.016);
    let after_one = cam.eye;
    assert!(after_one != CAMERA_START_EYE);
    for _ in 0..200 {
        cam.update(0.016);
    }
    assert!((cam.eye.distance(cam.target) - radius).abs() < 1e-3);
    let offset = cam.eye - cam.target;
    let theta = offset.x.atan2(offset.z);
    assert!((theta - 0.5).abs() < 1e-2, "theta {theta}");
}

#[test]
fn zoom_is_clamped_to_limits() {
    let mut cam = camera();
    cam.zoom(1000.0);
    for _ in 0..400 {
        cam.update(0.016);
    }
    assert!(cam.eye.distance(cam.target) <= CAMERA_MAX_DISTANCE + 1e-3);
    cam.zoom(1e-6);
    for _ in 0..400 {
        cam.update(0.016);
    }
    assert!(cam.eye.distance(cam.target) >= CAMERA_MIN_DISTANCE - 1e-3);
}

#[test]
fn restore_drops_pending_motion() {
    let mut cam = camera();
    let start = cam.snapshot();
    cam.orbit(2.0, 0.5);
    cam.update(0.016);
    cam.restore(start);
    for _ in 0..10 {
        cam.update(0.016);
    }
    assert_eq!(cam.snapshot(), start);
}

#[test]
fn auto_rotate_turns_the_eye() {
    let mut cam = camera();
    cam.auto_rotate = true;
    for _ in 0..60 {
        cam.update(1.0 / 60.0);
    }
    assert!(cam.eye.distance(CAMERA_START_EYE) > 1e-3);
}

#[test]
fn ray_hits_box_front_face() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    let b = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let t = ray_aabb(&ray, &b).expect("hit");
    assert!((t - 4.0).abs() < 1e-5);
    let away = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
    assert!(ray_aabb(&away, &b).is_none());
}

#[test]
fn ray_triangle_hit_and_miss() {
    let tri = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
    let t = ray_triangle(&ray, &tri).expect("hit");
    assert!((t - 3.0).abs() < 1e-5);
    let beside = Ray::new(Vec3::new(2.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(ray_triangle(&beside, &tri).is_none());
    let parallel = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(1.0, 0.0, 0.0));
    assert!(ray_triangle(&parallel, &tri).is_none());
}

#[test]
fn raycast_returns_the_closest_mesh() {
    let mut h = MeshHierarchy::new();
    let cube = || Some(Geometry::cuboid(Vec3::splat(-0.5), Vec3::splat(0.5)));
    let back = h
        .add_node("back", None, Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0)), cube())
        .expect("root");
    let front = h
        .add_node("front", None, Mat4::IDENTITY, cube())
        .expect("root");
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    let hit = h.raycast(&ray).expect("hit");
    assert_eq!(hit.mesh, MeshId(front));
    assert_ne!(hit.mesh, MeshId(back));
    assert!((hit.distance - 4.5).abs() < 1e-4);
    assert!((hit.point - Vec3::new(0.0, 0.0, 0.5)).length() < 1e-4);
}

#[test]
fn child_transforms_compose_with_parents() {
    let mut h = MeshHierarchy::new();
    let root = h
        .add_node("root", None, Mat4::from_translation(Vec3::X), None)
        .expect("root");
    let child = h
        .add_node(
            "child",
            Some(root),
            Mat4::from_translation(Vec3::Y),
            Some(Geometry::cuboid(Vec3::splat(-0.1), Vec3::splat(0.1))),
        )
        .expect("child");
    assert_eq!(h.world_origin(MeshId(child)), Some(Vec3::new(1.0, 1.0, 0.0)));
    assert_eq!(h.meshes().collect::<Vec<_>>(), [MeshId(child)]);
    h.set_root_transform(Mat4::from_scale(Vec3::splat(2.0)));
    assert_eq!(h.world_origin(MeshId(child)), Some(Vec3::new(2.0, 2.0, 0.0)));
}

#[test]
fn foreign_mesh_ids_are_not_a_panic() {
    let mut h = MeshHierarchy::new();
    h.add_node(
        "only",
        None,
        Mat4::IDENTITY,
        Some(Geometry::cuboid(Vec3::splat(-0.5), Vec3::splat(0.5))),
    )
    .expect("root");
    let foreign = MeshId(7);
    assert_eq!(h.world_transform(7), None);
    assert_eq!(h.world_origin(foreign), None);
    assert!(h.world_triangles(foreign).is_empty());
    assert_eq!(h.mesh_bounds(foreign), None);
    assert_eq!(h.name(foreign), "");
}

#[test]
fn unknown_parent_is_rejected() {
    let mut h = MeshHierarchy::new();
    assert_eq!(
        h.add_node("orphan", Some(3), Mat4::IDENTITY, None),
        Err(SceneError::UnknownParent { parent: 3, len: 0 })
    );
    assert!(h.is_empty());
}
