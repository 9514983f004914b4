//! Multisig governance tests.
//!
//! The multisig owns a custody bridge wired to the messaging mock, so
//! executed batches exercise real privileged calls.

use cosmwasm_std::{coins, to_json_binary, Addr, Binary, Coin, Empty, Uint128, Uint256};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use common::AssetInfo;
use custody_bridge::msg::{
    AssetResponse, ConfigResponse as BridgeConfigResponse, ExecuteMsg as BridgeExecuteMsg,
    InstantiateMsg as BridgeInstantiateMsg, QueryMsg as BridgeQueryMsg,
};
use messaging_mock::msg::{ExecuteMsg as MockExecuteMsg, InstantiateMsg as MockInstantiateMsg};
use multisig_admin::msg::{
    Call, CanExecuteResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, IsApprovedResponse,
    QueryMsg, TransactionResponse, TxIdsResponse, TxStatus,
};

const DENOM: &str = "uluna";
const ZKX_TICKER: u64 = 1431520323;
const ZKX_ASSET_ID: u128 = 90986567876;
const DELAY: u64 = 3_600;

fn asset_remote() -> Uint256 {
    Uint256::from(0x054a_9192_2c36_8c98_5038_3e38_2033_0b99u128)
}

fn contract_multisig() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        multisig_admin::contract::execute,
        multisig_admin::contract::instantiate,
        multisig_admin::contract::query,
    );
    Box::new(contract)
}

fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        custody_bridge::contract::execute,
        custody_bridge::contract::instantiate,
        custody_bridge::contract::query,
    );
    Box::new(contract)
}

fn contract_messaging() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        messaging_mock::contract::execute,
        messaging_mock::contract::instantiate,
        messaging_mock::contract::query,
    );
    Box::new(contract)
}

struct Governance {
    app: App,
    multisig: Addr,
    bridge: Addr,
    messaging: Addr,
    admins: Vec<Addr>,
    outsider: Addr,
}

fn setup() -> Governance {
    let mut app = App::default();
    let admins: Vec<Addr> = (1..=4)
        .map(|i| Addr::unchecked(format!("terra1admin{}", i)))
        .collect();
    let outsider = Addr::unchecked("terra1outsider");

    app.init_modules(|router, _, storage| {
        for account in admins.iter().chain([&outsider]) {
            router
                .bank
                .init_balance(storage, account, coins(1_000_000_000, DENOM))
                .unwrap();
        }
    });

    let code = app.store_code(contract_multisig());
    let multisig = app
        .instantiate_contract(
            code,
            admins[0].clone(),
            &InstantiateMsg {
                admins: admins.iter().map(|a| a.to_string()).collect(),
                quorum: 3,
                native_denom: DENOM.to_string(),
            },
            &[],
            "multisig-admin",
            None,
        )
        .unwrap();

    let code = app.store_code(contract_messaging());
    let messaging = app
        .instantiate_contract(
            code,
            admins[0].clone(),
            &MockInstantiateMsg {
                cancellation_delay: 0,
            },
            &[],
            "messaging-mock",
            None,
        )
        .unwrap();

    let code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            code,
            admins[0].clone(),
            &BridgeInstantiateMsg {
                owner: multisig.to_string(),
                messaging: messaging.to_string(),
                native_denom: DENOM.to_string(),
                native_ticker: 4543560,
                asset_remote_address: asset_remote(),
                withdrawal_remote_address: Uint256::zero(),
            },
            &[],
            "custody-bridge",
            None,
        )
        .unwrap();

    Governance {
        app,
        multisig,
        bridge,
        messaging,
        admins,
        outsider,
    }
}

impl Governance {
    fn admin(&self, i: usize) -> Addr {
        self.admins[i].clone()
    }

    fn exec(&mut self, sender: &Addr, msg: &ExecuteMsg, funds: &[Coin]) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.multisig.clone(), msg, funds)
    }

    fn propose(&mut self, tx_id: u64, calls: Vec<Call>, unlock_delay: u64) -> anyhow::Result<AppResponse> {
        let proposer = self.admin(0);
        self.exec(
            &proposer,
            &ExecuteMsg::Propose {
                tx_id,
                calls,
                unlock_delay,
            },
            &[],
        )
    }

    fn approve(&mut self, admin: usize, tx_id: u64) -> anyhow::Result<AppResponse> {
        let sender = self.admin(admin);
        self.exec(&sender, &ExecuteMsg::Approve { tx_id }, &[])
    }

    fn execute_tx(&mut self, tx_id: u64) -> anyhow::Result<AppResponse> {
        let sender = self.admin(0);
        self.exec(&sender, &ExecuteMsg::Execute { tx_id }, &[])
    }

    fn transaction(&self, tx_id: u64) -> TransactionResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.multisig, &QueryMsg::Transaction { tx_id })
            .unwrap()
    }

    fn can_execute(&self, tx_id: u64, value: u128) -> CanExecuteResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.multisig,
                &QueryMsg::CanExecute {
                    tx_id,
                    value: Uint128::new(value),
                },
            )
            .unwrap()
    }

    fn bridge_call(&self, msg: &BridgeExecuteMsg) -> Call {
        Call {
            target: self.bridge.to_string(),
            msg: to_json_binary(msg).unwrap(),
            value: Uint128::zero(),
        }
    }

    /// Remote registry authorizes adding ZKX to the bridge.
    fn authorize_zkx(&mut self) {
        let sender = self.admin(0);
        self.app
            .execute_contract(
                sender,
                self.messaging.clone(),
                &MockExecuteMsg::AddRemoteToLocalMessage {
                    from_address: asset_remote(),
                    to_address: self.bridge.to_string(),
                    payload: custody_bridge::payload::add_asset(
                        ZKX_TICKER,
                        Uint128::new(ZKX_ASSET_ID),
                    ),
                },
                &[],
            )
            .unwrap();
    }

    fn advance_seconds(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += seconds / 5;
        });
    }

    fn balance(&self, account: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(account, DENOM)
            .unwrap()
            .amount
            .u128()
    }
}

fn root_err(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}

// ============================================================================
// Batched Privileged Calls
// ============================================================================

#[test]
fn test_batch_waits_for_quorum_and_timelock() {
    let mut gov = setup();
    gov.authorize_zkx();
    let next_remote = asset_remote() + Uint256::one();

    let calls = vec![
        gov.bridge_call(&BridgeExecuteMsg::RegisterAsset {
            ticker: ZKX_TICKER,
            asset_id: Uint128::new(ZKX_ASSET_ID),
        }),
        gov.bridge_call(&BridgeExecuteMsg::SetTokenAddress {
            ticker: ZKX_TICKER,
            token: "terra1zkxtoken".to_string(),
        }),
        gov.bridge_call(&BridgeExecuteMsg::SetAssetRemoteAddress {
            address: next_remote,
        }),
    ];
    gov.propose(1, calls, DELAY).unwrap();

    gov.approve(0, 1).unwrap();
    gov.approve(1, 1).unwrap();
    assert_eq!(
        root_err(gov.execute_tx(1)),
        "Quorum not met: 2 of 3 approvals"
    );

    gov.approve(2, 1).unwrap();
    assert_eq!(
        root_err(gov.execute_tx(1)),
        format!("Not yet executable: {} seconds remaining", DELAY)
    );

    gov.advance_seconds(DELAY - 1);
    let check = gov.can_execute(1, 0);
    assert!(!check.can_execute);
    assert_eq!(
        check.reason,
        Some("Not yet executable: 1 seconds remaining".to_string())
    );

    gov.advance_seconds(1);
    assert!(gov.can_execute(1, 0).can_execute);
    gov.execute_tx(1).unwrap();

    let asset: AssetResponse = gov
        .app
        .wrap()
        .query_wasm_smart(&gov.bridge, &BridgeQueryMsg::Asset { ticker: ZKX_TICKER })
        .unwrap();
    assert!(asset.registered);
    assert_eq!(asset.token_address, Some(Addr::unchecked("terra1zkxtoken")));

    let config: BridgeConfigResponse = gov
        .app
        .wrap()
        .query_wasm_smart(&gov.bridge, &BridgeQueryMsg::Config {})
        .unwrap();
    assert_eq!(config.asset_remote_address, next_remote);

    let tx = gov.transaction(1);
    assert_eq!(tx.status, TxStatus::Executed);
    assert_eq!(tx.approvals, 3);
    assert_eq!(tx.unlock_at, tx.proposed_at.plus_seconds(DELAY));

    assert_eq!(root_err(gov.execute_tx(1)), "Transaction already executed");
    assert_eq!(
        root_err(gov.approve(3, 1)),
        "Transaction already executed"
    );
}

#[test]
fn test_failing_call_reverts_whole_batch() {
    let mut gov = setup();
    let next_remote = asset_remote() + Uint256::one();

    // Second call has no remote authorization yet
    let calls = vec![
        gov.bridge_call(&BridgeExecuteMsg::SetAssetRemoteAddress {
            address: next_remote,
        }),
        gov.bridge_call(&BridgeExecuteMsg::RegisterAsset {
            ticker: ZKX_TICKER,
            asset_id: Uint128::new(ZKX_ASSET_ID),
        }),
    ];
    gov.propose(7, calls, 0).unwrap();
    for admin in 0..3 {
        gov.approve(admin, 7).unwrap();
    }

    let err = root_err(gov.execute_tx(7));
    assert!(err.contains("Invalid message to consume"), "got: {}", err);

    let config: BridgeConfigResponse = gov
        .app
        .wrap()
        .query_wasm_smart(&gov.bridge, &BridgeQueryMsg::Config {})
        .unwrap();
    assert_eq!(config.asset_remote_address, asset_remote());
    assert_eq!(gov.transaction(7).status, TxStatus::Proposed);
}

#[test]
fn test_native_transfer_call_uses_attached_funds() {
    let mut gov = setup();
    let recipient = Addr::unchecked("terra1recipient");

    let calls = vec![Call {
        target: recipient.to_string(),
        msg: Binary::default(),
        value: Uint128::new(1_000),
    }];
    gov.propose(3, calls, 0).unwrap();
    for admin in 1..4 {
        gov.approve(admin, 3).unwrap();
    }

    let check = gov.can_execute(3, 0);
    assert!(!check.can_execute);
    assert_eq!(
        check.reason,
        Some("Insufficient balance: need 1000, have 0".to_string())
    );
    assert!(gov.can_execute(3, 1_000).can_execute);

    assert_eq!(
        root_err(gov.execute_tx(3)),
        "Insufficient balance: need 1000, have 0"
    );

    let executor = gov.admin(0);
    gov.exec(&executor, &ExecuteMsg::Execute { tx_id: 3 }, &coins(1_000, DENOM))
        .unwrap();
    assert_eq!(gov.balance(&recipient), 1_000);
    assert_eq!(gov.balance(&gov.multisig.clone()), 0);
}

#[test]
fn test_withdraw_only_through_executed_batch() {
    let mut gov = setup();
    let admin = gov.admin(0);
    let treasury = Addr::unchecked("terra1treasury");

    let err = root_err(gov.exec(
        &admin,
        &ExecuteMsg::Withdraw {
            to: treasury.to_string(),
            amount: Uint128::new(10),
        },
        &[],
    ));
    assert_eq!(err, "Unauthorized: only callable by the multisig itself");

    // Funds parked on the bridge outside custody
    let bridge = gov.bridge.clone();
    gov.app
        .send_tokens(admin.clone(), bridge, &coins(50_000, DENOM))
        .unwrap();

    let calls = vec![
        gov.bridge_call(&BridgeExecuteMsg::TransferFunds {
            asset: AssetInfo::native(DENOM),
            recipient: gov.multisig.to_string(),
            amount: Uint128::new(50_000),
        }),
        Call {
            target: gov.multisig.to_string(),
            msg: to_json_binary(&ExecuteMsg::Withdraw {
                to: treasury.to_string(),
                amount: Uint128::new(50_000),
            })
            .unwrap(),
            value: Uint128::zero(),
        },
    ];
    gov.propose(11, calls, 0).unwrap();
    for i in 0..3 {
        gov.approve(i, 11).unwrap();
    }
    gov.execute_tx(11).unwrap();

    assert_eq!(gov.balance(&treasury), 50_000);
    assert_eq!(gov.balance(&gov.bridge.clone()), 0);
}

// ============================================================================
// Approvals & Lifecycle
// ============================================================================

#[test]
fn test_approve_is_idempotent_and_revocable() {
    let mut gov = setup();
    let call = gov.bridge_call(&BridgeExecuteMsg::SetAssetRemoteAddress {
        address: Uint256::from(5u64),
    });
    gov.propose(2, vec![call], 0).unwrap();

    gov.approve(1, 2).unwrap();
    let res = gov.approve(1, 2).unwrap();
    assert!(res.events.iter().any(|e| e
        .attributes
        .iter()
        .any(|a| a.key == "already_approved" && a.value == "true")));
    assert_eq!(gov.transaction(2).approvals, 1);

    let approved: IsApprovedResponse = gov
        .app
        .wrap()
        .query_wasm_smart(
            &gov.multisig,
            &QueryMsg::IsApproved {
                tx_id: 2,
                admin: gov.admin(1).to_string(),
            },
        )
        .unwrap();
    assert!(approved.approved);

    let admin = gov.admin(1);
    gov.exec(&admin, &ExecuteMsg::RevokeApproval { tx_id: 2 }, &[])
        .unwrap();
    assert_eq!(gov.transaction(2).approvals, 0);
    assert_eq!(
        root_err(gov.exec(&admin, &ExecuteMsg::RevokeApproval { tx_id: 2 }, &[])),
        "Transaction not approved by caller"
    );

    let outsider = gov.outsider.clone();
    assert_eq!(
        root_err(gov.exec(&outsider, &ExecuteMsg::Approve { tx_id: 2 }, &[])),
        "Unauthorized: caller is not an admin"
    );
    assert_eq!(
        root_err(gov.approve(0, 99)),
        "Transaction not found: 99"
    );
}

#[test]
fn test_revoked_approval_blocks_execution() {
    let mut gov = setup();
    let call = gov.bridge_call(&BridgeExecuteMsg::SetAssetRemoteAddress {
        address: Uint256::from(5u64),
    });
    gov.propose(4, vec![call], 0).unwrap();
    for admin in 0..3 {
        gov.approve(admin, 4).unwrap();
    }

    let admin = gov.admin(2);
    gov.exec(&admin, &ExecuteMsg::RevokeApproval { tx_id: 4 }, &[])
        .unwrap();
    assert_eq!(
        root_err(gov.execute_tx(4)),
        "Quorum not met: 2 of 3 approvals"
    );

    gov.approve(3, 4).unwrap();
    gov.execute_tx(4).unwrap();
}

#[test]
fn test_cancel_by_proposer_only() {
    let mut gov = setup();
    let call = gov.bridge_call(&BridgeExecuteMsg::SetAssetRemoteAddress {
        address: Uint256::from(5u64),
    });
    gov.propose(6, vec![call], 0).unwrap();
    for admin in 0..3 {
        gov.approve(admin, 6).unwrap();
    }

    let other = gov.admin(1);
    assert_eq!(
        root_err(gov.exec(&other, &ExecuteMsg::Cancel { tx_id: 6 }, &[])),
        "Unauthorized: only the proposer can cancel a transaction"
    );

    let proposer = gov.admin(0);
    gov.exec(&proposer, &ExecuteMsg::Cancel { tx_id: 6 }, &[])
        .unwrap();
    assert_eq!(gov.transaction(6).status, TxStatus::Cancelled);

    assert_eq!(root_err(gov.execute_tx(6)), "Transaction cancelled");
    assert_eq!(root_err(gov.approve(3, 6)), "Transaction cancelled");
    assert_eq!(
        gov.can_execute(6, 0).reason,
        Some("Transaction cancelled".to_string())
    );

    // Cancelled ids stay taken
    let call = gov.bridge_call(&BridgeExecuteMsg::SetAssetRemoteAddress {
        address: Uint256::from(6u64),
    });
    assert_eq!(
        root_err(gov.propose(6, vec![call], 0)),
        "Transaction id already used: 6"
    );
}

#[test]
fn test_propose_validation() {
    let mut gov = setup();
    let outsider = gov.outsider.clone();
    let call = gov.bridge_call(&BridgeExecuteMsg::SetAssetRemoteAddress {
        address: Uint256::from(5u64),
    });

    assert_eq!(
        root_err(gov.exec(
            &outsider,
            &ExecuteMsg::Propose {
                tx_id: 1,
                calls: vec![call.clone()],
                unlock_delay: 0,
            },
            &[],
        )),
        "Unauthorized: caller is not an admin"
    );

    assert_eq!(root_err(gov.propose(1, vec![], 0)), "Empty call batch");

    let transfer = Call {
        target: "terra1recipient".to_string(),
        msg: Binary::default(),
        value: Uint128::zero(),
    };
    assert_eq!(
        root_err(gov.propose(1, vec![call.clone(), transfer], 0)),
        "Invalid call 1: transfer without value"
    );

    assert_eq!(
        root_err(gov.propose(1, vec![call.clone()], u64::MAX)),
        format!("Invalid unlock delay: {} seconds", u64::MAX)
    );
    let ids: TxIdsResponse = gov
        .app
        .wrap()
        .query_wasm_smart(&gov.multisig, &QueryMsg::AllTxIds {})
        .unwrap();
    assert!(ids.tx_ids.is_empty());

    gov.propose(1, vec![call.clone()], 0).unwrap();
    assert_eq!(
        root_err(gov.propose(1, vec![call], 0)),
        "Transaction id already used: 1"
    );
}

#[test]
fn test_tx_ids_listed_in_order() {
    let mut gov = setup();
    let call = gov.bridge_call(&BridgeExecuteMsg::SetAssetRemoteAddress {
        address: Uint256::from(5u64),
    });
    for tx_id in [5, 2, 9] {
        gov.propose(tx_id, vec![call.clone()], 60).unwrap();
    }

    let ids: TxIdsResponse = gov
        .app
        .wrap()
        .query_wasm_smart(&gov.multisig, &QueryMsg::AllTxIds {})
        .unwrap();
    assert_eq!(ids.tx_ids, vec![2, 5, 9]);

    let tx = gov.transaction(9);
    assert_eq!(tx.proposer, gov.admin(0));
    assert_eq!(tx.calls, vec![call]);
    assert_eq!(tx.status, TxStatus::Proposed);
}

// ============================================================================
// Instantiation
// ============================================================================

#[test]
fn test_instantiate_validation() {
    let mut app = App::default();
    let code = app.store_code(contract_multisig());
    let creator = Addr::unchecked("terra1creator");

    let mut try_instantiate = |admins: &[&str], quorum: u32| {
        app.instantiate_contract(
            code,
            creator.clone(),
            &InstantiateMsg {
                admins: admins.iter().map(|a| a.to_string()).collect(),
                quorum,
                native_denom: DENOM.to_string(),
            },
            &[],
            "multisig-admin",
            None,
        )
        .map_err(|e| e.root_cause().to_string())
    };

    assert_eq!(
        try_instantiate(&[], 1).unwrap_err(),
        "Invalid config: at least one admin required"
    );
    assert_eq!(
        try_instantiate(&["terra1a", "terra1a"], 1).unwrap_err(),
        "Invalid config: duplicate admin"
    );
    assert_eq!(
        try_instantiate(&["terra1a", "terra1b"], 0).unwrap_err(),
        "Invalid config: quorum must be between 1 and 2"
    );
    assert_eq!(
        try_instantiate(&["terra1a", "terra1b"], 3).unwrap_err(),
        "Invalid config: quorum must be between 1 and 2"
    );

    let multisig = try_instantiate(&["terra1a", "terra1b"], 2).unwrap();
    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&multisig, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.quorum, 2);
    assert_eq!(
        config.admins,
        vec![Addr::unchecked("terra1a"), Addr::unchecked("terra1b")]
    );
}
