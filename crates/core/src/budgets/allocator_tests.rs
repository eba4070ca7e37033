#[cfg(test)]
mod tests {
    use crate::budgets::allocator::{
        add_segment, add_strategy_allocation, allocated_total, finalize, remaining,
        remove_segment, update_segment, utilization, vet, UNALLOCATED_NAME,
    };
    use crate::budgets::{Allocation, AllocationError, AllocationKind, UtilizationTier};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn segment(id: i64, name: &str, amount: Decimal) -> Allocation {
        Allocation {
            id,
            kind: AllocationKind::Segment,
            name: name.to_string(),
            amount,
            strategy_id: None,
        }
    }

    // ==================== add_segment ====================

    #[test]
    fn test_add_segment_appends_and_assigns_next_id() {
        let current = vec![segment(1, "Social", dec!(4000))];
        let result = add_segment(&current, dec!(10000), "Search", dec!(3000)).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[1].id, 2);
        assert_eq!(result[1].kind, AllocationKind::Segment);
        assert_eq!(result[1].name, "Search");
        assert_eq!(result[1].amount, dec!(3000));
    }

    #[test]
    fn test_add_segment_trims_name() {
        let result = add_segment(&[], dec!(1000), "  Display  ", dec!(100)).unwrap();
        assert_eq!(result[0].name, "Display");
    }

    #[test]
    fn test_add_segment_rejects_blank_name() {
        assert_eq!(
            add_segment(&[], dec!(1000), "   ", dec!(100)),
            Err(AllocationError::EmptyName)
        );
    }

    #[test]
    fn test_add_segment_rejects_non_positive_amount() {
        assert_eq!(
            add_segment(&[], dec!(1000), "Social", Decimal::ZERO),
            Err(AllocationError::InvalidAmount(Decimal::ZERO))
        );
        assert_eq!(
            add_segment(&[], dec!(1000), "Social", dec!(-50)),
            Err(AllocationError::InvalidAmount(dec!(-50)))
        );
    }

    #[test]
    fn test_add_segment_rejects_amount_over_ceiling() {
        let current = vec![segment(1, "Social", dec!(4000))];
        let err = add_segment(&current, dec!(10000), "Search", dec!(7000)).unwrap_err();

        assert_eq!(
            err,
            AllocationError::ExceedsBudget {
                requested: dec!(7000),
                available: dec!(6000),
            }
        );
        // Rejected edits leave the caller's list untouched.
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn test_add_segment_allows_exact_fill() {
        let current = vec![segment(1, "Social", dec!(4000))];
        let result = add_segment(&current, dec!(10000), "Search", dec!(6000)).unwrap();
        assert_eq!(allocated_total(&result), dec!(10000));
    }

    // ==================== update_segment ====================

    #[test]
    fn test_update_segment_excludes_own_amount_from_ceiling() {
        // A no-op edit must always succeed even on a full budget.
        let current = vec![
            segment(1, "Social", dec!(4000)),
            segment(2, "Search", dec!(6000)),
        ];
        let result = update_segment(&current, dec!(10000), 2, "Search", dec!(6000)).unwrap();
        assert_eq!(result, current);
    }

    #[test]
    fn test_update_segment_can_grow_into_remainder() {
        let current = vec![
            segment(1, "Social", dec!(4000)),
            segment(2, "Search", dec!(2000)),
        ];
        let result = update_segment(&current, dec!(10000), 2, "Paid Search", dec!(6000)).unwrap();
        assert_eq!(result[1].name, "Paid Search");
        assert_eq!(result[1].amount, dec!(6000));
        assert_eq!(result[0], current[0]);
    }

    #[test]
    fn test_update_segment_rejects_overflow_counting_others() {
        let current = vec![
            segment(1, "Social", dec!(4000)),
            segment(2, "Search", dec!(2000)),
        ];
        let err = update_segment(&current, dec!(10000), 2, "Search", dec!(6001)).unwrap_err();
        assert_eq!(
            err,
            AllocationError::ExceedsBudget {
                requested: dec!(6001),
                available: dec!(6000),
            }
        );
    }

    #[test]
    fn test_update_segment_unknown_id() {
        let current = vec![segment(1, "Social", dec!(4000))];
        assert_eq!(
            update_segment(&current, dec!(10000), 99, "Search", dec!(100)),
            Err(AllocationError::SegmentNotFound(99))
        );
    }

    #[test]
    fn test_update_segment_ignores_unallocated_entry() {
        let finalized = finalize(&[segment(1, "Social", dec!(4000))], dec!(10000));
        let unallocated_id = finalized.last().unwrap().id;
        assert_eq!(
            update_segment(&finalized, dec!(10000), unallocated_id, "X", dec!(1)),
            Err(AllocationError::SegmentNotFound(unallocated_id))
        );
    }

    // ==================== remove_segment ====================

    #[test]
    fn test_remove_segment_drops_matching_entry() {
        let current = vec![
            segment(1, "Social", dec!(4000)),
            segment(2, "Search", dec!(2000)),
        ];
        let result = remove_segment(&current, 1);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_remove_segment_unknown_id_is_noop() {
        let current = vec![segment(1, "Social", dec!(4000))];
        assert_eq!(remove_segment(&current, 42), current);
    }

    #[test]
    fn test_remove_then_finalize_has_non_negative_remainder() {
        let current = vec![
            segment(1, "Social", dec!(4000)),
            segment(2, "Search", dec!(6000)),
        ];
        let after_remove = remove_segment(&current, 2);
        let finalized = finalize(&after_remove, dec!(10000));
        assert!(remaining(&after_remove, dec!(10000)) >= Decimal::ZERO);
        assert_eq!(finalized.last().unwrap().amount, dec!(6000));
    }

    // ==================== finalize ====================

    #[test]
    fn test_finalize_empty_budget_is_single_unallocated_entry() {
        let result = finalize(&[], dec!(5000));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, AllocationKind::Unallocated);
        assert_eq!(result[0].name, UNALLOCATED_NAME);
        assert_eq!(result[0].amount, dec!(5000));
    }

    #[test]
    fn test_finalize_fully_allocated_budget_has_no_unallocated_entry() {
        let segments = vec![
            segment(1, "Social", dec!(4000)),
            segment(2, "Search", dec!(6000)),
        ];
        let result = finalize(&segments, dec!(10000));
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|a| a.kind == AllocationKind::Segment));
    }

    #[test]
    fn test_finalize_drops_stale_unallocated_input() {
        let mut segments = finalize(&[segment(1, "Social", dec!(4000))], dec!(10000));
        assert_eq!(segments.len(), 2);
        // Re-finalizing a previously finalized list must not double-count.
        segments = finalize(&segments, dec!(10000));
        let total: Decimal = segments.iter().map(|a| a.amount).sum();
        assert_eq!(total, dec!(10000));
        assert_eq!(
            segments
                .iter()
                .filter(|a| a.kind == AllocationKind::Unallocated)
                .count(),
            1
        );
    }

    // ==================== budget builder scenario ====================

    #[test]
    fn test_build_allocation_scenario() {
        let total = dec!(10000);
        let list = add_segment(&[], total, "Social", dec!(4000)).unwrap();
        assert_eq!(allocated_total(&list), dec!(4000));
        assert_eq!(remaining(&list, total), dec!(6000));

        assert!(matches!(
            add_segment(&list, total, "Search", dec!(7000)),
            Err(AllocationError::ExceedsBudget { .. })
        ));

        let list = add_segment(&list, total, "Search", dec!(6000)).unwrap();
        let finalized = finalize(&list, total);
        assert_eq!(finalized.len(), 2);
        assert!(finalized
            .iter()
            .all(|a| a.kind != AllocationKind::Unallocated));
    }

    // ==================== utilization ====================

    #[test]
    fn test_utilization_zero_total() {
        assert_eq!(utilization(&[], Decimal::ZERO), Decimal::ZERO);
        assert_eq!(
            utilization(&[segment(1, "Social", dec!(10))], dec!(-5)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_utilization_excludes_unallocated_bucket() {
        let finalized = finalize(&[segment(1, "Social", dec!(4000))], dec!(10000));
        assert_eq!(utilization(&finalized, dec!(10000)), dec!(40));
    }

    #[test]
    fn test_utilization_tiers() {
        assert_eq!(UtilizationTier::from_percent(dec!(40)), UtilizationTier::Healthy);
        assert_eq!(UtilizationTier::from_percent(dec!(74.9)), UtilizationTier::Healthy);
        assert_eq!(UtilizationTier::from_percent(dec!(75)), UtilizationTier::Warning);
        assert_eq!(UtilizationTier::from_percent(dec!(89.9)), UtilizationTier::Warning);
        assert_eq!(UtilizationTier::from_percent(dec!(90)), UtilizationTier::Critical);
        assert_eq!(UtilizationTier::from_percent(dec!(100)), UtilizationTier::Critical);
    }

    // ==================== vet ====================

    #[test]
    fn test_vet_reassigns_sequential_ids_and_drops_unallocated() {
        let input = vec![
            segment(7, "Social", dec!(4000)),
            Allocation {
                id: 9,
                kind: AllocationKind::Unallocated,
                name: UNALLOCATED_NAME.to_string(),
                amount: dec!(6000),
                strategy_id: None,
            },
            segment(3, "Search", dec!(2000)),
        ];
        let vetted = vet(&input, dec!(10000)).unwrap();
        assert_eq!(vetted.len(), 2);
        assert_eq!(vetted[0].id, 1);
        assert_eq!(vetted[1].id, 2);
        assert_eq!(vetted[1].name, "Search");
    }

    #[test]
    fn test_vet_rejects_over_ceiling_input() {
        let input = vec![
            segment(1, "Social", dec!(4000)),
            segment(2, "Search", dec!(7000)),
        ];
        assert!(matches!(
            vet(&input, dec!(10000)),
            Err(AllocationError::ExceedsBudget { .. })
        ));
    }

    // ==================== strategy allocations ====================

    #[test]
    fn test_add_strategy_allocation_links_strategy() {
        let result =
            add_strategy_allocation(&[], dec!(10000), "Q3 Awareness", dec!(2500), 14).unwrap();
        assert_eq!(result[0].kind, AllocationKind::Strategy);
        assert_eq!(result[0].strategy_id, Some(14));
        assert_eq!(result[0].amount, dec!(2500));
    }

    // ==================== properties ====================

    proptest! {
        #[test]
        fn prop_finalize_always_sums_to_total(
            amounts in prop::collection::vec(1u64..=100_000, 0..8),
            headroom in 0u64..=50_000,
        ) {
            let mut segments = Vec::new();
            for (i, cents) in amounts.iter().enumerate() {
                segments.push(segment(i as i64 + 1, &format!("Segment {i}"), Decimal::new(*cents as i64, 2)));
            }
            let total = allocated_total(&segments) + Decimal::new(headroom as i64, 2);
            prop_assume!(total > Decimal::ZERO);

            let finalized = finalize(&segments, total);
            let sum: Decimal = finalized.iter().map(|a| a.amount).sum();
            prop_assert_eq!(sum, total);
        }

        #[test]
        fn prop_utilization_monotone_in_allocated_amount(
            first in 1u64..=50_000,
            second in 1u64..=50_000,
        ) {
            let total = dec!(2000);
            let a = Decimal::new(first.min(second) as i64, 2);
            let b = Decimal::new(first.max(second) as i64, 2);
            prop_assume!(b <= total);

            let lower = vec![segment(1, "Social", a)];
            let higher = vec![segment(1, "Social", b)];
            prop_assert!(utilization(&lower, total) <= utilization(&higher, total));
        }

        #[test]
        fn prop_noop_update_always_succeeds(
            amount in 1u64..=100_000,
        ) {
            let amount = Decimal::new(amount as i64, 2);
            let list = vec![segment(1, "Social", amount)];
            // total exactly equals the single segment: the tightest ceiling.
            let result = update_segment(&list, amount, 1, "Social", amount);
            prop_assert_eq!(result.unwrap(), list);
        }
    }
}
