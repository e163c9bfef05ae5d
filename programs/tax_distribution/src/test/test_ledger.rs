#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use crate::error::TaxDistributionError;
    use crate::event::CoinReceived;
    use crate::state::*;
    use crate::test::fixture::*;

    #[test]
    fn test_instantiate_lists_beneficiaries() {
        let fx = Fixture::new();

        assert_eq!(fx.ledger.admin, fx.admin);
        assert_eq!(
            fx.ledger.beneficiaries(),
            vec![
                Beneficiary { address: fx.a, weight: 300, withdrawn: 0 },
                Beneficiary { address: fx.b, weight: 500, withdrawn: 0 },
                Beneficiary { address: fx.c, weight: 200, withdrawn: 0 },
            ]
        );
    }

    #[test]
    fn test_instantiate_rejects_invalid_weights() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        let result = TaxLedger::create(Pubkey::new_unique(), 1, 255, 255, &[weight(a, 600), weight(b, 600)], 3);
        assert_eq!(error_number(result), code(TaxDistributionError::InvalidWeights));

        let result = TaxLedger::create(Pubkey::new_unique(), 1, 255, 255, &[], 3);
        assert_eq!(error_number(result), code(TaxDistributionError::InvalidWeights));
    }

    #[test]
    fn test_balances_follow_weights() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(100_000_000);

        assert_eq!(fx.balance_of(&fx.a).unwrap(), 30_000_000);
        assert_eq!(fx.balance_of(&fx.b).unwrap(), 50_000_000);
        assert_eq!(fx.balance_of(&fx.c).unwrap(), 20_000_000);

        // Queries have no side effects
        assert_eq!(fx.balance_of(&fx.a).unwrap(), 30_000_000);
        assert_eq!(fx.gateway.held(), 100_000_000);
    }

    #[test]
    fn test_partial_withdraw_only_affects_caller() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(100_000_000);

        let (a, b, c) = (fx.a, fx.b, fx.c);
        let payout = fx.ledger.withdraw(&a, Some(1_500_000), &mut fx.gateway).unwrap();
        assert_eq!(payout, CoinReceived { receiver: a, amount: 1_500_000 });

        assert_eq!(fx.balance_of(&a).unwrap(), 28_500_000);
        assert_eq!(fx.balance_of(&b).unwrap(), 50_000_000);
        assert_eq!(fx.balance_of(&c).unwrap(), 20_000_000);
        assert_eq!(fx.withdrawn(&a), 1_500_000);
        assert_eq!(fx.gateway.paid_to(&a), 1_500_000);

        assert_eq!(fx.withdraw(&b, None).unwrap(), 50_000_000);
        assert_eq!(fx.balance_of(&a).unwrap(), 28_500_000);
        assert_eq!(fx.balance_of(&b).unwrap(), 0);
        assert_eq!(fx.balance_of(&c).unwrap(), 20_000_000);

        assert_eq!(fx.withdraw(&a, None).unwrap(), 28_500_000);
        assert_eq!(fx.withdraw(&c, None).unwrap(), 20_000_000);
        for address in [a, b, c] {
            assert_eq!(fx.balance_of(&address).unwrap(), 0);
        }
        assert_eq!(fx.gateway.held(), 0);
    }

    #[test]
    fn test_floor_rounding_leaves_dust() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(123_456_123_456);

        let (a, b, c) = (fx.a, fx.b, fx.c);
        assert_eq!(fx.withdraw(&a, None).unwrap(), 37_036_837_036);
        assert_eq!(fx.withdraw(&b, None).unwrap(), 61_728_061_728);
        assert_eq!(fx.withdraw(&c, None).unwrap(), 24_691_224_691);
        assert_eq!(fx.gateway.held(), 1);

        // Dust is never claimable on its own
        for address in [a, b, c] {
            assert_eq!(fx.balance_of(&address).unwrap(), 0);
        }
    }

    #[test]
    fn test_conservation_across_deposits_and_withdrawals() {
        let mut fx = Fixture::new();
        let (a, b, c) = (fx.a, fx.b, fx.c);
        let mut deposited = 0u64;

        let steps: [(u64, Pubkey, Option<u64>); 6] = [
            (1_000_003, a, None),
            (7, b, Some(3)),
            (999, c, None),
            (250_000_001, a, Some(1)),
            (0, b, None),
            (42, c, None),
        ];

        for (deposit, caller, amount) in steps {
            fx.gateway.deposit(deposit);
            deposited += deposit;

            let before = fx.ledger.total_ever_received(&fx.gateway).unwrap();
            assert_eq!(before, deposited);

            let _ = fx.withdraw(&caller, amount);

            let after = fx.ledger.total_ever_received(&fx.gateway).unwrap();
            assert_eq!(after, deposited);

            for address in [a, b, c] {
                let share = fx.ledger.weight_table.fraction_of(&address, after).unwrap();
                assert!(fx.withdrawn(&address) <= share);
            }
        }
    }

    #[test]
    fn test_withdraw_rejects_unknown_beneficiary() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(100_000_000);
        let stranger = Pubkey::new_unique();

        assert_eq!(
            error_number(fx.withdraw(&stranger, None)),
            code(TaxDistributionError::UnknownBeneficiary)
        );
        assert_eq!(
            error_number(fx.balance_of(&stranger)),
            code(TaxDistributionError::UnknownBeneficiary)
        );
        // Admin is not a beneficiary either
        let admin = fx.admin;
        assert_eq!(
            error_number(fx.withdraw(&admin, None)),
            code(TaxDistributionError::UnknownBeneficiary)
        );
    }

    #[test]
    fn test_withdraw_rejects_amounts_outside_entitlement() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(100_000_000);
        let a = fx.a;

        assert_eq!(
            error_number(fx.withdraw(&a, Some(30_000_001))),
            code(TaxDistributionError::InsufficientEntitlement)
        );
        assert_eq!(
            error_number(fx.withdraw(&a, Some(0))),
            code(TaxDistributionError::InsufficientEntitlement)
        );
        assert_eq!(fx.withdrawn(&a), 0);

        assert_eq!(fx.withdraw(&a, Some(30_000_000)).unwrap(), 30_000_000);
    }

    #[test]
    fn test_withdraw_with_nothing_accrued() {
        let mut fx = Fixture::new();
        let a = fx.a;

        assert_eq!(
            error_number(fx.withdraw(&a, None)),
            code(TaxDistributionError::NothingToWithdraw)
        );

        fx.gateway.deposit(100);
        assert_eq!(fx.withdraw(&a, None).unwrap(), 30);
        assert_eq!(
            error_number(fx.withdraw(&a, None)),
            code(TaxDistributionError::NothingToWithdraw)
        );
        assert!(fx.gateway.payouts().len() == 1);
    }

    #[test]
    fn test_failed_transfer_leaves_ledger_unchanged() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(100_000_000);
        let a = fx.a;
        fx.withdraw(&a, Some(1_000)).unwrap();

        let snapshot = fx.ledger.clone();
        fx.gateway.fail_at_transfer(1);

        assert_eq!(
            error_number(fx.withdraw(&a, None)),
            code(TaxDistributionError::TransferFailed)
        );
        assert_eq!(fx.ledger, snapshot);
        assert_eq!(fx.withdrawn(&a), 1_000);
        assert_eq!(fx.gateway.held(), 100_000_000 - 1_000);
    }

    #[test]
    fn test_admin_operations_require_admin() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(100_000_000);
        let (a, b) = (fx.a, fx.b);
        let snapshot = fx.ledger.clone();

        assert_eq!(
            error_number(fx.ledger.set_beneficiaries(&a, &[weight(a, 600), weight(b, 400)], 3, &mut fx.gateway)),
            code(TaxDistributionError::NotAdmin)
        );
        assert_eq!(
            error_number(fx.ledger.change_admin(&a, b)),
            code(TaxDistributionError::NotAdmin)
        );
        assert_eq!(
            error_number(fx.ledger.emergency_withdraw(&a, &mut fx.gateway)),
            code(TaxDistributionError::NotAdmin)
        );

        assert_eq!(fx.ledger, snapshot);
        assert!(fx.gateway.payouts().is_empty());
    }

    #[test]
    fn test_change_admin_moves_privileges() {
        let mut fx = Fixture::new();
        let (owner, a, b) = (fx.admin, fx.a, fx.b);

        fx.ledger.change_admin(&owner, a).unwrap();
        assert_eq!(fx.ledger.admin, a);

        fx.gateway.deposit(5_000);
        assert_eq!(
            error_number(fx.ledger.emergency_withdraw(&owner, &mut fx.gateway)),
            code(TaxDistributionError::NotAdmin)
        );
        assert_eq!(
            error_number(fx.ledger.change_admin(&b, b)),
            code(TaxDistributionError::NotAdmin)
        );

        let payout = fx.ledger.emergency_withdraw(&a, &mut fx.gateway).unwrap();
        assert_eq!(payout, CoinReceived { receiver: a, amount: 5_000 });

        // Accounting is untouched by the handover
        assert_eq!(fx.withdrawn(&a), 0);
    }

    #[test]
    fn test_emergency_withdraw_drains_everything() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(120_000_000);
        let (admin, a, b, c) = (fx.admin, fx.a, fx.b, fx.c);

        let payout = fx.ledger.emergency_withdraw(&admin, &mut fx.gateway).unwrap();
        assert_eq!(payout, CoinReceived { receiver: admin, amount: 120_000_000 });
        assert_eq!(fx.gateway.held(), 0);
        assert_eq!(fx.ledger.drained, 120_000_000);

        for address in [a, b, c] {
            assert_eq!(fx.balance_of(&address).unwrap(), 0);
            assert_eq!(fx.withdrawn(&address), 0);
        }

        assert_eq!(
            error_number(fx.ledger.emergency_withdraw(&admin, &mut fx.gateway)),
            code(TaxDistributionError::NothingToWithdraw)
        );
    }

    #[test]
    fn test_emergency_withdraw_after_partial_payouts() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(100_000_000);
        let (admin, a, b, c) = (fx.admin, fx.a, fx.b, fx.c);

        fx.withdraw(&a, None).unwrap();
        fx.ledger.emergency_withdraw(&admin, &mut fx.gateway).unwrap();
        assert_eq!(fx.gateway.paid_to(&admin), 70_000_000);

        // a's share of what is left on the books is below what it already took
        for address in [a, b, c] {
            assert_eq!(fx.balance_of(&address).unwrap(), 0);
        }
        assert_eq!(
            error_number(fx.withdraw(&b, None)),
            code(TaxDistributionError::NothingToWithdraw)
        );
        assert_eq!(fx.withdrawn(&a), 30_000_000);
    }

    #[test]
    fn test_broken_conservation_is_reported() {
        let mut fx = Fixture::new();
        fx.gateway.deposit(100);
        let a = fx.a;

        // Counter ahead of any possible share without an emergency drain
        fx.ledger.weight_table.get_mut(&a).unwrap().withdrawn = 1_000;
        assert_eq!(
            error_number(fx.balance_of(&a)),
            code(TaxDistributionError::InvariantViolation)
        );
    }
}
