use cube_core::{
    CubeN,
    validate::{is_valid, validate},
};
use fastrand::Rng;

#[test_log::test]
fn test_scramble_then_inverse_solves() {
    for size in [2, 3, 4, 5] {
        let mut cube = CubeN::new(size, "wgrboy").unwrap();
        let scramble = cube.scramble(None);

        assert_eq!(scramble.len(), 8 * size);
        assert!(!cube.is_solved());

        cube.apply(&scramble.inverse()).unwrap();
        assert!(cube.is_solved(), "{size}x{size} did not come back");
    }
}

#[test_log::test]
fn test_scramble_then_inverse_solves_big() {
    for size in [50, 70] {
        let mut cube = CubeN::new(size, "wgrboy").unwrap();
        let scramble = cube.scramble(None);
        cube.apply(&-scramble).unwrap();
        assert!(cube.is_solved());
    }
}

#[test_log::test]
fn test_long_scramble_is_not_solved() {
    let mut cube = CubeN::new(67, "wgrboy").unwrap();
    cube.scramble(Some(100));
    assert!(!cube.is_solved());
}

#[test_log::test]
fn test_scramble_never_revisits() {
    let mut cube = CubeN::new(2, "wgrboy").unwrap();
    let scramble = cube.scramble_with(&mut Rng::with_seed(3), Some(60));

    cube.reset();
    let mut seen = vec![cube.state_hash()];
    for &move_ in &scramble {
        cube.turn(move_).unwrap();
        assert!(!seen.contains(&cube.state_hash()));
        seen.push(cube.state_hash());
    }
}

#[test_log::test]
fn test_solved_cubes_are_valid() {
    for size in 2..40 {
        let cube = CubeN::new(size, "wgrboy").unwrap();
        assert!(is_valid(&cube.to_face_map(), size), "{size}x{size}");
    }
}

#[test_log::test]
fn test_scrambled_cubes_are_valid() {
    for size in [2, 3, 4, 5, 6, 7, 10, 20] {
        let mut cube = CubeN::new(size, "wgrboy").unwrap();

        for _ in 0..5 {
            cube.scramble(None);
            assert!(is_valid(&cube.to_face_map(), size), "{size}x{size}");
        }
    }
}

#[test_log::test]
fn test_scrambled_big_cubes_are_valid() {
    for size in [50, 70] {
        let mut cube = CubeN::new(size, "wgrboy").unwrap();
        cube.scramble(None);
        assert!(is_valid(&cube.to_face_map(), size));
    }
}

#[test_log::test]
fn test_slice_and_rotation_moves_stay_valid() {
    let mut cube = CubeN::new(5, "abcdef").unwrap();
    cube.apply_str("M E S x y z u d l r f b 2Rw' M2").unwrap();
    assert!(validate(&cube.to_face_map(), 5).is_ok());
}

#[test_log::test]
fn test_scheme_of_solved_cube() {
    let cube = CubeN::new(4, "abcdef").unwrap();
    assert_eq!(
        validate(&cube.to_face_map(), 4),
        Ok(['a', 'b', 'c', 'd', 'e', 'f'])
    );
}
