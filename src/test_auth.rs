#![cfg(test)]
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

use crate::{Capability, ClaimKind, PrizeWheel, PrizeWheelClient};

fn make_client(env: &Env) -> PrizeWheelClient<'_> {
    let id = env.register_contract(None, PrizeWheel);
    PrizeWheelClient::new(env, &id)
}

fn init_admin(env: &Env, client: &PrizeWheelClient) -> Address {
    let admin = Address::generate(env);
    client.initialize(&admin);
    admin
}

fn signer_stub(env: &Env) -> BytesN<20> {
    BytesN::from_array(env, &[7u8; 20])
}

#[test]
fn configure_wrong_caller_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let admin = init_admin(&env, &client);
    env.mock_all_auths();
    let attacker = Address::generate(&env);
    let payment_token = Address::generate(&env);
    assert!(client
        .try_configure(&attacker, &signer_stub(&env), &10, &payment_token)
        .is_err());
    assert!(client.get_config().is_none());
    client.configure(&admin, &signer_stub(&env), &10, &payment_token);
    assert!(client.get_config().is_some());
}

#[test]
fn configure_missing_auth_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let admin = init_admin(&env, &client);
    let payment_token = Address::generate(&env);
    assert!(client
        .try_configure(&admin, &signer_stub(&env), &10, &payment_token)
        .is_err());
    assert!(client.get_config().is_none());
}

#[test]
fn set_rate_wrong_caller_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let admin = init_admin(&env, &client);
    env.mock_all_auths();
    let attacker = Address::generate(&env);
    assert!(client.try_set_rate(&attacker, &73, &15, &8, &3, &1).is_err());
    assert!(client.get_rate().is_none());
    client.set_rate(&admin, &73, &15, &8, &3, &1);
    assert!(client.get_rate().is_some());
}

#[test]
fn set_rate_missing_auth_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let admin = init_admin(&env, &client);
    assert!(client.try_set_rate(&admin, &73, &15, &8, &3, &1).is_err());
    assert!(client.get_rate().is_none());
}

#[test]
fn grant_role_wrong_caller_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let _admin = init_admin(&env, &client);
    env.mock_all_auths();
    let attacker = Address::generate(&env);
    let target = Address::generate(&env);
    assert!(client
        .try_grant_role(&attacker, &target, &Capability::Minter)
        .is_err());
    assert!(!client.has_role(&target, &Capability::Minter));
}

#[test]
fn grant_role_missing_auth_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let admin = init_admin(&env, &client);
    let target = Address::generate(&env);
    assert!(client
        .try_grant_role(&admin, &target, &Capability::Minter)
        .is_err());
    assert!(!client.has_role(&target, &Capability::Minter));
}

#[test]
fn revoke_role_wrong_caller_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let admin = init_admin(&env, &client);
    env.mock_all_auths();
    let target = Address::generate(&env);
    client.grant_role(&admin, &target, &Capability::Minter);
    let attacker = Address::generate(&env);
    assert!(client
        .try_revoke_role(&attacker, &target, &Capability::Minter)
        .is_err());
    assert!(client.has_role(&target, &Capability::Minter));
    client.revoke_role(&admin, &target, &Capability::Minter);
    assert!(!client.has_role(&target, &Capability::Minter));
}

#[test]
fn admin_entry_points_require_initialize() {
    let env = Env::default();
    env.mock_all_auths();
    let client = make_client(&env);
    let caller = Address::generate(&env);
    let payment_token = Address::generate(&env);
    assert!(client
        .try_configure(&caller, &signer_stub(&env), &10, &payment_token)
        .is_err());
    assert!(client.try_set_rate(&caller, &73, &15, &8, &3, &1).is_err());
    assert!(client
        .try_grant_role(&caller, &caller, &Capability::Minter)
        .is_err());
    assert!(client.get_config().is_none());
    assert!(client.get_rate().is_none());
    assert!(!client.has_role(&caller, &Capability::Minter));
}

#[test]
fn claim_missing_auth_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let user = Address::generate(&env);
    assert!(client
        .try_claim(
            &user,
            &ClaimKind::Whitelist,
            &0u64,
            &None,
            &BytesN::from_array(&env, &[0u8; 64]),
            &0u32,
        )
        .is_err());
    assert!(!client.is_whitelisted(&user));
    assert!(!client.is_claimed(&ClaimKind::Whitelist, &user, &0u64));
}

#[test]
fn buy_ticket_missing_auth_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let buyer = Address::generate(&env);
    assert!(client.try_buy_ticket(&buyer, &1u32, &10).is_err());
    assert_eq!(client.get_ticket_count(&buyer), 0);
    assert!(client.get_ticket(&buyer, &0u32).is_none());
}
