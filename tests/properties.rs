//! Property tests for the codec and permutation invariants.

use fft_golden::{bitrev, word};
use proptest::prelude::*;

proptest! {
    // decode -> encode is the identity on every 32-bit word: no double
    // rounding, and boundary saturation never fires on already-quantized
    // values.
    #[test]
    fn codec_round_trip(word_in in any::<u32>()) {
        let value = word::decode_to_complex64(word_in);
        prop_assert_eq!(word::encode(value), word_in);
    }

    #[test]
    fn written_words_parse_back(word_in in any::<u32>()) {
        let line = format!("{:08X}", word_in);
        prop_assert_eq!(word::parse_hex_line(&line).unwrap(), word_in);
        let prefixed = format!("0x{:08X}", word_in);
        prop_assert_eq!(word::parse_hex_line(&prefixed).unwrap(), word_in);
    }

    #[test]
    fn bitrev_is_an_involution(
        exp in 0u32..=10,
        data in prop::collection::vec(any::<u32>(), 1024),
    ) {
        let n = 1usize << exp;
        let perm = bitrev::bit_reverse_indices(n).unwrap();
        let input = &data[..n];
        let once = bitrev::apply(input, &perm);
        let twice = bitrev::apply(&once, &perm);
        prop_assert_eq!(&twice[..], input);
    }

    #[test]
    fn bitrev_is_a_bijection(exp in 0u32..=10) {
        let n = 1usize << exp;
        let mut perm = bitrev::bit_reverse_indices(n).unwrap();
        perm.sort_unstable();
        prop_assert_eq!(perm, (0..n).collect::<Vec<_>>());
    }
}
