use super::*;
use crate::q15::Q15;
use crate::word;

fn c(re: i16, im: i16) -> ComplexQ15 {
    ComplexQ15::from_bits(re, im)
}

#[test]
fn test_stage_descriptors_for_n16() {
    let s0 = StageDescriptor::for_stage(16, 0);
    assert_eq!(s0.stride, 1);
    assert_eq!(s0.group_size, 2);
    assert_eq!(s0.num_groups, 8);
    assert_eq!(s0.tw_step, 8);

    let s3 = StageDescriptor::for_stage(16, 3);
    assert_eq!(s3.stride, 8);
    assert_eq!(s3.group_size, 16);
    assert_eq!(s3.num_groups, 1);
    assert_eq!(s3.tw_step, 1);
}

#[test]
fn test_butterfly_enumeration_n8_stage1() {
    let desc = StageDescriptor::for_stage(8, 1);
    let bfs: Vec<Butterfly> = desc.butterflies().collect();
    assert_eq!(
        bfs,
        vec![
            Butterfly { a: 0, b: 2, exponent: 0 },
            Butterfly { a: 1, b: 3, exponent: 2 },
            Butterfly { a: 4, b: 6, exponent: 0 },
            Butterfly { a: 5, b: 7, exponent: 2 },
        ]
    );
}

#[test]
fn test_butterflies_touch_disjoint_slots() {
    for stage in 0..5 {
        let desc = StageDescriptor::for_stage(32, stage);
        let mut touched = vec![false; 32];
        for bf in desc.butterflies() {
            assert!(!touched[bf.a], "slot {} touched twice", bf.a);
            assert!(!touched[bf.b], "slot {} touched twice", bf.b);
            touched[bf.a] = true;
            touched[bf.b] = true;
        }
        assert!(touched.iter().all(|&t| t), "stage {} left slots idle", stage);
    }
}

#[test]
fn test_rejects_non_power_of_two() {
    assert!(matches!(DitFft::new(24), Err(FftError::InvalidLength(24))));
}

#[test]
fn test_rejects_wrong_buffer_length() {
    let fft = DitFft::new(8).unwrap();
    let mut buffer = vec![ComplexQ15::ZERO; 6];
    assert!(matches!(
        fft.process(&mut buffer),
        Err(FftError::SizeMismatch {
            expected: 8,
            actual: 6
        })
    ));
}

#[test]
fn test_impulse_gives_flat_spectrum() {
    let n = 8;
    let fft = DitFft::new(n).unwrap();
    let mut buffer = vec![ComplexQ15::ZERO; n];
    buffer[0] = c(Q15::MAX, 0);

    fft.process(&mut buffer).unwrap();

    for (i, bin) in buffer.iter().enumerate() {
        assert_eq!(bin.re.to_bits(), Q15::MAX, "real part at bin {}", i);
        assert_eq!(bin.im.to_bits(), 0, "imag part at bin {}", i);
    }
}

#[test]
fn test_four_point_worked_example() {
    // Time samples [0, -0.5, 0, 0]; the 4-point DFT is
    // [-0.5, 0.5j, 0.5, -0.5j] and every value is exactly representable,
    // so the fixed-point result must be bit-exact.
    let words = [0x0000_0000u32, 0xC000_0000, 0x0000_0000, 0x0000_0000];
    let mut buffer: Vec<ComplexQ15> = words.iter().map(|&w| word::decode(w)).collect();

    let fft = DitFft::new(4).unwrap();
    fft.process(&mut buffer).unwrap();

    assert_eq!(buffer[0], c(-16384, 0));
    assert_eq!(buffer[1], c(0, 16384));
    assert_eq!(buffer[2], c(16384, 0));
    assert_eq!(buffer[3], c(0, -16384));
}

#[test]
fn test_run_stages_expects_bit_reversed_input() {
    // Feeding the stages a pre-permuted buffer must agree with process()
    // on the natural-order original.
    let n = 16;
    let fft = DitFft::new(n).unwrap();
    let input: Vec<ComplexQ15> = (0..n)
        .map(|i| c((i as i16 - 8) * 1000, (i as i16) * 500))
        .collect();

    let mut via_process = input.clone();
    fft.process(&mut via_process).unwrap();

    let perm = crate::bitrev::bit_reverse_indices(n).unwrap();
    let mut pre_reversed = crate::bitrev::apply(&input, &perm);
    fft.run_stages(&mut pre_reversed).unwrap();

    assert_eq!(pre_reversed, via_process);
}

#[test]
fn test_stage_order_independence() {
    // Butterflies within one stage write disjoint slots, so any execution
    // order must give a bit-identical buffer.
    let n = 16;
    let fft = DitFft::new(n).unwrap();
    let input: Vec<ComplexQ15> = (0..n)
        .map(|i| c((i as i16).wrapping_mul(4231), (i as i16).wrapping_mul(-2731)))
        .collect();

    for stage in 0..fft.num_stages() {
        let mut canonical = input.clone();
        fft.run_stage(&mut canonical, stage);

        let desc = StageDescriptor::for_stage(n, stage);
        let mut reversed_order = input.clone();
        let bfs: Vec<Butterfly> = desc.butterflies().collect();
        for bf in bfs.iter().rev() {
            let w = fft.twiddles().get(bf.exponent);
            let (x, y) = butterfly(reversed_order[bf.a], reversed_order[bf.b], w);
            reversed_order[bf.a] = x;
            reversed_order[bf.b] = y;
        }

        assert_eq!(reversed_order, canonical, "stage {} order-dependent", stage);
    }
}

#[test]
fn test_length_one_transform_is_identity() {
    let fft = DitFft::new(1).unwrap();
    let mut buffer = vec![c(1234, -4321)];
    fft.process(&mut buffer).unwrap();
    assert_eq!(buffer[0], c(1234, -4321));
}
