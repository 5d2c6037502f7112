//! Property tests over random key sheets and messages.

use enigma::{EnigmaError, Machine, MachineConfig};
use proptest::prelude::*;

const STEPPING_ROTORS: [&str; 8] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];
const REFLECTORS: [&str; 3] = ["A", "B", "C"];

/// Three distinct stepping rotors, reflector, rings, positions and up to ten
/// non-overlapping plug leads.
fn key_sheet() -> impl Strategy<Value = MachineConfig> {
    (
        Just(STEPPING_ROTORS.to_vec()).prop_shuffle(),
        prop::sample::select(REFLECTORS.to_vec()),
        prop::collection::vec(1u8..=26, 3),
        "[A-Z]{3}",
        Just((b'A'..=b'Z').map(char::from).collect::<Vec<_>>()).prop_shuffle(),
        0usize..=10,
    )
        .prop_map(|(rotors, reflector, rings, positions, letters, leads)| {
            let plugboard: Vec<String> = letters
                .chunks(2)
                .take(leads)
                .map(|pair| pair.iter().collect())
                .collect();
            MachineConfig::new(&rotors[..3])
                .with_reflector(reflector)
                .with_ring_settings(&rings)
                .with_positions(&positions)
                .with_plugboard(&plugboard)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_reciprocal(config in key_sheet(), plaintext in "[A-Z]{0,200}") {
        let mut machine = Machine::new(&config).unwrap();
        let cipher = machine.encode_message(&plaintext).unwrap();
        machine.reset();
        let decoded = machine.decode_message(&cipher).unwrap();
        prop_assert_eq!(decoded, plaintext);
    }

    #[test]
    fn prop_no_letter_encodes_to_itself(config in key_sheet(), plaintext in "[A-Z]{1,200}") {
        let mut machine = Machine::new(&config).unwrap();
        let cipher = machine.encode_message(&plaintext).unwrap();
        prop_assert_eq!(cipher.len(), plaintext.len());
        for (p, c) in plaintext.chars().zip(cipher.chars()) {
            prop_assert_ne!(p, c);
        }
    }

    #[test]
    fn prop_deterministic(config in key_sheet(), plaintext in "[a-zA-Z]{0,100}") {
        let mut first = Machine::new(&config).unwrap();
        let mut second = Machine::new(&config).unwrap();
        prop_assert_eq!(
            first.encode_message(&plaintext).unwrap(),
            second.encode_message(&plaintext).unwrap()
        );
        prop_assert_eq!(first.rotor_positions(), second.rotor_positions());
    }

    #[test]
    fn prop_rejected_input_keeps_state(
        config in key_sheet(),
        prefix in "[A-Z]{0,50}",
        bad in "[0-9 .,!?\\-]",
    ) {
        let mut machine = Machine::new(&config).unwrap();
        machine.encode_message(&prefix).unwrap();
        let before = machine.rotor_positions();
        let bad_char = bad.chars().next().unwrap();
        prop_assert_eq!(
            machine.encode_char(bad_char),
            Err(EnigmaError::InvalidCharacter(bad_char))
        );
        prop_assert_eq!(machine.rotor_positions(), before.clone());
        let poisoned = format!("{}{}", prefix, bad);
        prop_assert!(machine.encode_message(&poisoned).is_err());
        prop_assert_eq!(machine.rotor_positions(), before);
    }

    #[test]
    fn prop_output_is_uppercase_letters(config in key_sheet(), plaintext in "[a-z]{1,100}") {
        let mut machine = Machine::new(&config).unwrap();
        let cipher = machine.encode_message(&plaintext).unwrap();
        prop_assert!(cipher.chars().all(|c| c.is_ascii_uppercase()));
    }
}
