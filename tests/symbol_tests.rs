use qrgen::{ECLevel, MaskPattern, QRBuilder, QRError, Version};

#[test]
fn test_hello_at_high_level() {
    let symbol = QRBuilder::new("HELLO").ec_level(ECLevel::H).build().unwrap();

    assert_eq!(*symbol.version(), 1);
    assert_eq!(symbol.width(), 21);

    // finder pattern corners and cores
    for &(r, c) in &[(0, 0), (0, 20), (20, 0)] {
        assert!(symbol.is_dark(r, c).unwrap());
    }
    assert!(symbol.is_dark(3, 3).unwrap());
    assert!(!symbol.is_dark(1, 1).unwrap());
    assert!(!symbol.is_dark(1, 15).unwrap());

    // the always-dark module above the bottom-left finder
    assert!(symbol.is_dark(13, 8).unwrap());
}

#[test]
fn test_builds_are_deterministic() {
    let a = QRBuilder::new("DETERMINISTIC OUTPUT").build().unwrap();
    let b = QRBuilder::new("DETERMINISTIC OUTPUT").build().unwrap();

    assert_eq!(a.version(), b.version());
    assert_eq!(a.mask_pattern(), b.mask_pattern());
    for r in 0..a.width() {
        for c in 0..a.width() {
            assert_eq!(a.is_dark(r, c).unwrap(), b.is_dark(r, c).unwrap());
        }
    }
}

#[test]
fn test_capacity_boundary_selects_version() {
    // version 1 at L holds 17 bytes
    let fits = "a".repeat(17);
    let symbol = QRBuilder::new(&fits).ec_level(ECLevel::L).build().unwrap();
    assert_eq!(*symbol.version(), 1);

    let spills = "a".repeat(18);
    let symbol = QRBuilder::new(&spills).ec_level(ECLevel::L).build().unwrap();
    assert_eq!(*symbol.version(), 2);
}

#[test]
fn test_oversized_input_fails() {
    // version 40 at L tops out at 2953 bytes
    let text = "a".repeat(2954);
    assert_eq!(QRBuilder::new(&text).ec_level(ECLevel::L).build().err(), Some(QRError::CapacityOverflow));
}

#[test]
fn test_oversized_input_for_pinned_version_fails() {
    let text = "a".repeat(20);
    let result = QRBuilder::new(&text)
        .version(Version::new(1).unwrap())
        .ec_level(ECLevel::L)
        .build();
    assert_eq!(result.err(), Some(QRError::CapacityOverflow));
}

#[test]
fn test_function_cells_stable_across_masks() {
    let reference = QRBuilder::new("MASK STABILITY").mask(MaskPattern::new(0)).build().unwrap();
    let w = reference.width();

    for m in 1..8 {
        let symbol = QRBuilder::new("MASK STABILITY").mask(MaskPattern::new(m)).build().unwrap();
        assert_eq!(symbol.mask_pattern(), Some(MaskPattern::new(m)));

        // finder regions
        for r in 0..8 {
            for c in 0..8 {
                assert_eq!(symbol.is_dark(r, c).unwrap(), reference.is_dark(r, c).unwrap());
                assert_eq!(
                    symbol.is_dark(r, w - 1 - c).unwrap(),
                    reference.is_dark(r, w - 1 - c).unwrap()
                );
                assert_eq!(
                    symbol.is_dark(w - 1 - r, c).unwrap(),
                    reference.is_dark(w - 1 - r, c).unwrap()
                );
            }
        }

        // timing patterns
        for i in 8..w - 8 {
            assert_eq!(symbol.is_dark(6, i).unwrap(), reference.is_dark(6, i).unwrap());
            assert_eq!(symbol.is_dark(i, 6).unwrap(), reference.is_dark(i, 6).unwrap());
        }
    }
}

#[test]
fn test_timing_pattern_alternates() {
    let symbol = QRBuilder::new("TIMING").build().unwrap();
    let w = symbol.width();
    for i in 8..w - 8 {
        assert_eq!(symbol.is_dark(6, i).unwrap(), i % 2 == 0);
        assert_eq!(symbol.is_dark(i, 6).unwrap(), i % 2 == 0);
    }
}

#[test]
fn test_non_ascii_input() {
    let symbol = QRBuilder::new("héllo wörld").ec_level(ECLevel::M).build().unwrap();
    // 13 bytes plus the 3-byte BOM charge needs more than v1-M's 14
    assert_eq!(*symbol.version(), 2);
}

#[test]
fn test_version_seven_carries_version_info() {
    let symbol = QRBuilder::new("VERSION INFO")
        .version(Version::new(7).unwrap())
        .build()
        .unwrap();
    let w = symbol.width();
    // both 6x3 blocks are fully resolved and mirror each other
    for i in 0..18 {
        let (r, c) = (i / 3, i % 3 + w - 11);
        let dark = symbol.is_dark(r, c).unwrap();
        assert_eq!(symbol.is_dark(c, r).unwrap(), dark);
    }
}

#[test]
fn test_every_cell_resolves() {
    let symbol = QRBuilder::new("FULL COVERAGE").build().unwrap();
    for r in 0..symbol.width() {
        for c in 0..symbol.width() {
            assert!(symbol.is_dark(r, c).is_ok(), "unresolved cell at ({r}, {c})");
        }
    }
    assert_eq!(symbol.is_dark(0, symbol.width()), Err(QRError::OutOfBounds));
}

#[test]
fn test_invalid_version_rejected() {
    assert!(Version::new(0).is_err());
    assert!(Version::new(41).is_err());
    assert!(Version::new(40).is_ok());
}
