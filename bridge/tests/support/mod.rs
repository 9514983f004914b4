//! Shared cw-multi-test wiring: bridge, messaging mock and cw20-base.

#![allow(dead_code)]

use cosmwasm_std::{coins, Addr, Coin, Empty, Uint128, Uint256};
use cw20::Cw20Coin;
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use serde::de::DeserializeOwned;

use custody_bridge::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use messaging_mock::msg::{
    ExecuteMsg as MockExecuteMsg, InstantiateMsg as MockInstantiateMsg, QueryMsg as MockQueryMsg,
};

pub const NATIVE_DENOM: &str = "uluna";

pub const ETH_TICKER: u64 = 4543560;
pub const ETH_ASSET_ID: u128 = 2012314141;
pub const ZKX_TICKER: u64 = 1431520323;
pub const ZKX_ASSET_ID: u128 = 90986567876;

/// Transport-side window between starting and finishing a cancellation
pub const MOCK_CANCELLATION_DELAY: u64 = 300;

pub fn asset_remote() -> Uint256 {
    Uint256::from(0x054a_9192_2c36_8c98_5038_3e38_2033_0b99u128)
}

pub fn withdrawal_remote() -> Uint256 {
    Uint256::from(0x054a_9192_2c36_8c98_5038_3e38_2033_0b9au128)
}

pub fn bob_remote() -> Uint256 {
    Uint256::from(0x02bc_ede6_2aeb_4183_1af3_b1d2_4b0f_3733u128)
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

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub struct TestEnv {
    pub app: App,
    pub bridge: Addr,
    pub messaging: Addr,
    pub owner: Addr,
    pub alice: Addr,
    pub bob: Addr,
}

pub fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let alice = Addr::unchecked("terra1alice");
    let bob = Addr::unchecked("terra1bob");

    app.init_modules(|router, _, storage| {
        for account in [&owner, &alice, &bob] {
            router
                .bank
                .init_balance(
                    storage,
                    account,
                    vec![
                        Coin::new(10_000_000_000, NATIVE_DENOM),
                        Coin::new(1_000_000, "uatom"),
                    ],
                )
                .unwrap();
        }
    });

    let messaging_code = app.store_code(contract_messaging());
    let messaging = app
        .instantiate_contract(
            messaging_code,
            owner.clone(),
            &MockInstantiateMsg {
                cancellation_delay: MOCK_CANCELLATION_DELAY,
            },
            &[],
            "messaging-mock",
            None,
        )
        .unwrap();

    let bridge_code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                messaging: messaging.to_string(),
                native_denom: NATIVE_DENOM.to_string(),
                native_ticker: ETH_TICKER,
                asset_remote_address: asset_remote(),
                withdrawal_remote_address: withdrawal_remote(),
            },
            &[],
            "custody-bridge",
            Some(owner.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        bridge,
        messaging,
        owner,
        alice,
        bob,
    }
}

impl TestEnv {
    pub fn execute(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.bridge.clone(), msg, funds)
    }

    pub fn query<T: DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app.wrap().query_wasm_smart(&self.bridge, msg).unwrap()
    }

    pub fn query_messaging<T: DeserializeOwned>(&self, msg: &MockQueryMsg) -> T {
        self.app.wrap().query_wasm_smart(&self.messaging, msg).unwrap()
    }

    /// Remote side sends `payload` from `from` to the bridge.
    pub fn remote_message(&mut self, from: Uint256, payload: Vec<Uint256>) {
        let sender = self.owner.clone();
        self.app
            .execute_contract(
                sender,
                self.messaging.clone(),
                &MockExecuteMsg::AddRemoteToLocalMessage {
                    from_address: from,
                    to_address: self.bridge.to_string(),
                    payload,
                },
                &[],
            )
            .unwrap();
    }

    /// Remote side picks up a message the bridge sent.
    pub fn remote_consume(&mut self, to: Uint256, payload: Vec<Uint256>, nonce: u64) {
        let sender = self.owner.clone();
        self.app
            .execute_contract(
                sender,
                self.messaging.clone(),
                &MockExecuteMsg::ConsumeLocalToRemote {
                    from_address: self.bridge.to_string(),
                    to_address: to,
                    payload,
                    nonce,
                },
                &[],
            )
            .unwrap();
    }

    pub fn register_asset(&mut self, ticker: u64, asset_id: u128) -> anyhow::Result<AppResponse> {
        let asset_id = Uint128::new(asset_id);
        self.remote_message(
            asset_remote(),
            custody_bridge::payload::add_asset(ticker, asset_id),
        );
        let owner = self.owner.clone();
        self.execute(&owner, &ExecuteMsg::RegisterAsset { ticker, asset_id }, &[])
    }

    pub fn deregister_asset(&mut self, ticker: u64, asset_id: u128) -> anyhow::Result<AppResponse> {
        let asset_id = Uint128::new(asset_id);
        self.remote_message(
            asset_remote(),
            custody_bridge::payload::remove_asset(ticker, asset_id),
        );
        let owner = self.owner.clone();
        self.execute(&owner, &ExecuteMsg::DeregisterAsset { ticker, asset_id }, &[])
    }

    pub fn deposit_native(&mut self, sender: &Addr, remote_recipient: Uint256, amount: u128) {
        self.execute(
            sender,
            &ExecuteMsg::DepositNative { remote_recipient },
            &coins(amount, NATIVE_DENOM),
        )
        .unwrap();
    }

    /// cw20-base token with an initial balance for `holder`.
    pub fn create_token(&mut self, holder: &Addr, amount: u128) -> Addr {
        let code_id = self.app.store_code(contract_cw20());
        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &cw20_base::msg::InstantiateMsg {
                    name: "ZKX Token".to_string(),
                    symbol: "ZKX".to_string(),
                    decimals: 6,
                    initial_balances: vec![Cw20Coin {
                        address: holder.to_string(),
                        amount: Uint128::new(amount),
                    }],
                    mint: None,
                    marketing: None,
                },
                &[],
                "zkx-token",
                None,
            )
            .unwrap()
    }

    pub fn native_balance(&self, account: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(account, NATIVE_DENOM)
            .unwrap()
            .amount
            .u128()
    }

    pub fn token_balance(&self, token: &Addr, account: &Addr) -> u128 {
        let res: cw20::BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &cw20::Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn advance_seconds(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += seconds / 5;
        });
    }
}
