use broadsword::dice::{
    roll, roll_sum, run_animated_roll, skill_check, AnimatedRoll, Frame, Rng, COSMETIC_FRAMES,
};

#[test]
fn rolls_stay_in_face_range() {
    let mut rng = Rng::new(11);
    for _ in 0..2_000 {
        let face = roll(&mut rng, 6);
        assert!((1..=6).contains(&face));
    }
}

#[test]
fn face_frequencies_are_roughly_uniform() {
    const SAMPLE: u32 = 60_000;
    let mut rng = Rng::new(99);
    let mut counts = [0_u32; 6];
    for _ in 0..SAMPLE {
        counts[(roll(&mut rng, 6) - 1) as usize] += 1;
    }
    // 15% around the expected count is orders of magnitude beyond the
    // statistical noise at this sample size.
    let expected = SAMPLE / 6;
    let tolerance = expected * 15 / 100;
    for (face, &count) in counts.iter().enumerate() {
        let deviation = (i64::from(count) - i64::from(expected)).unsigned_abs();
        assert!(
            deviation <= u64::from(tolerance),
            "face {}: {count} of {SAMPLE} rolls, expected about {expected}",
            face + 1
        );
    }
}

#[test]
fn same_seed_reproduces_the_sequence() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..50 {
        assert_eq!(roll(&mut a, 6), roll(&mut b, 6));
    }
}

#[test]
fn roll_sum_totals_its_rolls() {
    let mut rng = Rng::new(7);
    let result = roll_sum(&mut rng, 4, 6);
    assert_eq!(result.rolls.len(), 4);
    assert_eq!(result.total, result.rolls.iter().sum::<u32>());
}

#[test]
fn skill_check_arithmetic_holds() {
    let mut rng = Rng::new(3);
    let check = skill_check(&mut rng, 8, 2);
    assert_eq!(check.rolls.len(), 2);
    assert_eq!(check.natural, check.rolls.iter().sum::<u32>());
    assert_eq!(check.total, check.natural as i32 + 2);
    assert_eq!(check.effect, check.total - 8);
    assert_eq!(check.success, check.effect >= 0);
}

#[test]
fn animation_emits_cosmetic_frames_then_one_commit() {
    let mut rng = Rng::new(5);
    let mut animation = AnimatedRoll::new(2, 6);
    let mut cosmetic = 0;
    let mut committed = 0;
    while let Some(frame) = animation.next_frame(&mut rng) {
        match frame {
            Frame::Cosmetic(rolls) => {
                assert_eq!(rolls.len(), 2);
                cosmetic += 1;
            }
            Frame::Committed(result) => {
                assert_eq!(result.rolls.len(), 2);
                committed += 1;
            }
        }
    }
    assert_eq!(cosmetic, COSMETIC_FRAMES);
    assert_eq!(committed, 1);
    assert!(animation.is_complete());
    assert_eq!(animation.next_frame(&mut rng), None);
}

#[test]
fn committed_result_is_a_fresh_roll_not_the_last_frame() {
    // Same seed, with and without the animation wrapper: the committed total
    // must come from the roll after the 12 cosmetic ones.
    let mut plain = Rng::new(77);
    for _ in 0..COSMETIC_FRAMES {
        roll_sum(&mut plain, 2, 6);
    }
    let expected = roll_sum(&mut plain, 2, 6);

    let mut animated = Rng::new(77);
    let mut committed = None;
    run_animated_roll(&mut animated, 2, 6, |_| {}, |result| committed = Some(result));
    assert_eq!(committed, Some(expected));
}
