use flow_dyntex::data_structures::pixel_ratio::{MAX_EXTENT, ceil_power_of_two, texture_extent};

#[test]
fn should_round_up_to_powers_of_two() {
    assert_eq!(ceil_power_of_two(0.0), 0);
    assert_eq!(ceil_power_of_two(-3.0), 0);
    assert_eq!(ceil_power_of_two(f32::NAN), 0);
    assert_eq!(ceil_power_of_two(0.25), 1);
    assert_eq!(ceil_power_of_two(1.0), 1);
    assert_eq!(ceil_power_of_two(2.5), 4);
    assert_eq!(ceil_power_of_two(64.0), 64);
    assert_eq!(ceil_power_of_two(64.01), 128);
}

#[test]
fn should_saturate_beyond_largest_power() {
    assert_eq!(ceil_power_of_two(3.0e9), MAX_EXTENT);
    assert_eq!(ceil_power_of_two(f32::MAX), MAX_EXTENT);
    assert_eq!(ceil_power_of_two(f32::INFINITY), MAX_EXTENT);
}

#[test]
fn should_compute_extent_per_axis() {
    assert_eq!(texture_extent(17.0, 33.0, 1.0), (32, 64));
    assert_eq!(texture_extent(100.0, 50.0, 1.0), (128, 64));
    assert_eq!(texture_extent(10.0, 10.0, 1.01), (16, 16));
    assert_eq!(texture_extent(10.0, 10.0, 3.0), (32, 32));
    assert_eq!(texture_extent(0.0, 10.0, 2.0), (0, 32));
}
