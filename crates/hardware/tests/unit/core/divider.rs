//! Divider latency and fusion.

use rv64im_core::config::TimingConfig;
use rv64im_core::core::units::divider::Divider;
use rv64im_core::stats::SimStats;

use crate::common::builder::*;

fn divider(fusion: bool) -> Divider {
    Divider::new(&TimingConfig {
        div_latency: 39,
        fusion,
    })
}

#[test]
fn unfused_divide_pays_full_latency() {
    let mut stats = SimStats::default();
    divider(true).charge(&mut stats, None, div(3, 1, 2));
    assert_eq!(stats.cycles, 39);
    assert_eq!(stats.div_penalty_cycles, 39);
    assert_eq!((stats.div_ops, stats.div_fused), (1, 0));
}

#[test]
fn identical_operands_fuse() {
    let mut stats = SimStats::default();
    let word = rem(3, 1, 2);
    divider(true).charge(&mut stats, Some(div(3, 1, 2)), word);
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.div_penalty_cycles, 0);
    assert_eq!((stats.div_ops, stats.div_fused), (1, 1));
}

#[test]
fn any_differing_field_prevents_fusion() {
    assert!(Divider::fuses(div(3, 1, 2), divu(3, 1, 2)));
    assert!(!Divider::fuses(div(3, 1, 2), div(4, 1, 2)));
    assert!(!Divider::fuses(div(3, 1, 2), div(3, 5, 2)));
    assert!(!Divider::fuses(div(3, 1, 2), div(3, 1, 5)));
}

#[test]
fn disabled_fusion_always_charges() {
    let mut stats = SimStats::default();
    let word = div(3, 1, 2);
    divider(false).charge(&mut stats, Some(word), word);
    assert_eq!(stats.cycles, 39);
    assert_eq!(stats.div_fused, 0);
}
