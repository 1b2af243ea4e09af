use cgmath::{Deg, Quaternion, Rotation3};
use flow_dyntex::{Point3, SceneObject, Transform, Vector3};

#[test]
fn should_inherit_parent_scale_and_offset() {
    let parent = Transform::from(Vector3::new(10.0, 0.0, 0.0)).with_scale([2.0, 3.0, 1.0]);
    let child = Transform::from(Vector3::new(1.0, 1.0, 0.0)).with_scale([0.5, 0.5, 0.5]);

    let world = parent * child;

    assert_eq!(world.world_position(), Point3::new(12.0, 3.0, 0.0));
    assert_eq!(world.world_scale(), Vector3::new(1.0, 1.5, 0.5));
}

#[test]
fn should_rotate_child_position_with_parent() {
    let parent = Transform {
        rotation: Quaternion::from_angle_z(Deg(90.0)),
        ..Transform::new()
    };
    let child = Transform::from(Vector3::new(1.0, 0.0, 0.0));

    let world = &parent * &child;
    let position = world.world_position();

    assert!(position.x.abs() < 1e-6);
    assert!((position.y - 1.0).abs() < 1e-6);
}
