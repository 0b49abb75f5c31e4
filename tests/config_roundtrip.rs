use fibsq_stark::config::{ConfigError, StarkConfig, StarkConfigBuilder};
use insta::assert_snapshot;
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = StarkConfig> {
    (2u32..=16, 1u32..=5).prop_map(|(log_n, log_b)| {
        StarkConfigBuilder::new()
            .domain_size(1 << log_n)
            .domain_ex_mult(1 << log_b)
            .build()
            .expect("in-range powers of two")
    })
}

proptest! {
    #[test]
    fn json_round_trip(config in arb_config()) {
        let json = serde_json::to_string(&config).unwrap();
        let decoded: StarkConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, config);
        prop_assert_eq!(config.extended_size(), config.domain_size() * config.domain_ex_mult());
        prop_assert_eq!(1usize << config.fri_folds(), config.domain_size());
        prop_assert_eq!(config.trace_length() + 1, config.domain_size());
    }

    #[test]
    fn non_powers_of_two_are_rejected(size in 5usize..100_000, mult in 3usize..1000) {
        prop_assume!(!size.is_power_of_two() && !mult.is_power_of_two());
        prop_assert_eq!(
            StarkConfig::builder().domain_size(size).build(),
            Err(ConfigError::DomainSizeNotPowerOfTwo { got: size })
        );
        prop_assert_eq!(
            StarkConfig::builder().domain_ex_mult(mult).build(),
            Err(ConfigError::BlowupNotPowerOfTwo { got: mult })
        );
    }
}

#[test]
fn default_configuration_json() {
    let json = serde_json::to_string_pretty(&StarkConfig::default()).unwrap();
    assert_snapshot!(json, @r###"
    {
      "domain_size": 1024,
      "domain_ex_mult": 8
    }
    "###);
}

#[test]
fn deserialization_validates() {
    let err = serde_json::from_str::<StarkConfig>(r#"{"domain_size": 1000, "domain_ex_mult": 8}"#)
        .unwrap_err();
    assert!(err.to_string().starts_with("domain_size 1000 is not a power of two"));

    let err = serde_json::from_str::<StarkConfig>(r#"{"domain_size": 1024, "domain_ex_mult": 1}"#)
        .unwrap_err();
    assert!(err.to_string().starts_with("domain_ex_mult 1 is below the minimum of 2"));

    assert!(serde_json::from_str::<StarkConfig>(
        r#"{"domain_size": 1024, "domain_ex_mult": 8, "queries": 3}"#
    )
    .is_err());
}

#[test]
fn error_messages() {
    let too_large = StarkConfig::builder()
        .domain_size(1 << 28)
        .domain_ex_mult(8)
        .build()
        .unwrap_err();
    assert_snapshot!(
        too_large.to_string(),
        @"extended domain 2^31 exceeds the field's 2^30 subgroup"
    );
    let too_small = StarkConfig::builder().domain_size(2).build().unwrap_err();
    assert_snapshot!(too_small.to_string(), @"domain_size 2 is below the minimum of 4");
}

#[test]
fn limits_are_enforced() {
    assert_eq!(
        StarkConfig::builder().domain_size(2).build(),
        Err(ConfigError::DomainTooSmall { min: 4, got: 2 })
    );
    assert_eq!(
        StarkConfig::builder()
            .domain_size(1 << 28)
            .domain_ex_mult(8)
            .build(),
        Err(ConfigError::ExtendedDomainTooLarge {
            max_log2: 30,
            got_log2: 31,
        })
    );
    let edge = StarkConfig::builder()
        .domain_size(1 << 28)
        .domain_ex_mult(4)
        .build()
        .unwrap();
    assert_eq!(edge.extended_size(), 1 << 30);
}
