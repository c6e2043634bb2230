#![no_std]
#![deny(unsafe_code)]
#![deny(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, token, xdr::ToXdr, Address,
    Bytes, BytesN, Env, Symbol,
};

/// Centralized contract error codes. Auth failures are signaled by host panic (require_auth).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum WheelError {
    /// Signature does not recover to the configured authority signer.
    NotPermitted = 1,
    /// The (kind, claimant, nonce) key was consumed by an earlier claim.
    AlreadyClaimed = 2,
    /// Ticket payment is short, or the contract's stable-coin balance cannot cover a payout.
    NotEnoughBalance = 3,
    /// Outcome weights do not sum to 100.
    InvalidRate = 4,
    /// Caller is not the admin, or the contract lacks the required capability.
    Unauthorized = 5,
    /// Admin or reward configuration not set for an operation that needs it.
    NotInitialized = 6,
    /// initialize called more than once.
    AlreadyInitialized = 7,
    /// Ticket payment exceeds the exact total due; overpayment is rejected, not kept.
    InvalidPayment = 8,
    /// Amount is invalid (missing, non-positive, out of range, or supplied for a whitelist claim).
    InvalidAmount = 9,
    /// Checked arithmetic overflowed.
    Overflow = 10,
}

// ── Event symbols ────────────────────────────────────────────
const EVENT_INIT: Symbol = symbol_short!("init");
const EVENT_CONFIG_SET: Symbol = symbol_short!("cfg_set");
const EVENT_RATE_SET: Symbol = symbol_short!("rate_set");
const EVENT_ROLE_GRANTED: Symbol = symbol_short!("role_grnt");
const EVENT_ROLE_REVOKED: Symbol = symbol_short!("role_rvk");
/// Generic completion event emitted after every successful claim, alongside
/// the kind-specific one. Indexers that only care about consumption of a
/// (kind, claimant, nonce) key can watch this single topic.
const EVENT_CLAIMED: Symbol = symbol_short!("claimed");
const EVENT_CLAIMED_TOKEN: Symbol = symbol_short!("clm_tok");
const EVENT_CLAIMED_STABLE: Symbol = symbol_short!("clm_coin");
const EVENT_CLAIMED_NFT: Symbol = symbol_short!("clm_nft");
const EVENT_CLAIMED_WHITELIST: Symbol = symbol_short!("clm_wl");
const EVENT_BUY_TICKET: Symbol = symbol_short!("buy_tick");

// ── Claim domain separation ──────────────────────────────────
// Prefixes of the packed signing preimage. A signature issued for one claim
// kind can never verify as another because these differ.
const DOMAIN_CLAIM_TOKEN: &[u8] = b"CLAIM_TOKEN";
const DOMAIN_CLAIM_STABLE_COIN: &[u8] = b"CLAIM_STABLE_COIN";
const DOMAIN_CLAIM_NFT: &[u8] = b"CLAIM_NFT";
const DOMAIN_CLAIM_WHITELIST: &[u8] = b"CLAIM_WHITELIST";

// ── Data structures ──────────────────────────────────────────

/// The four reward kinds the wheel can settle. Which kind (and amount) a
/// player won is decided off-ledger; on-ledger code only verifies and settles.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimKind {
    /// Mint of the internal fungible reward token.
    Token = 0,
    /// Payout from the contract's pre-funded stable-coin balance.
    StableCoin = 1,
    /// Mint of sequential collection items.
    Nft = 2,
    /// Whitelist flag for the claimant; carries no amount.
    Whitelist = 3,
}

/// Named permissions grantable to an address.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Allows crediting the reward-token and collection books. Granted to the
    /// contract's own address before mintable kinds can settle.
    Minter = 0,
}

/// Wholesale reward configuration. Claims and ticket purchases resolve the
/// signing authority and the payment asset only through this record, never
/// through caller-supplied addresses.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RewardConfig {
    /// Ethereum-style address of the off-ledger authority: keccak-256 of the
    /// uncompressed secp256k1 public key, last 20 bytes.
    pub admin_signer: BytesN<20>,
    /// Price of one ticket in payment_token units.
    pub ticket_price: i128,
    /// Stellar asset used both for ticket payments and stable-coin payouts.
    pub payment_token: Address,
}

/// Five-tier outcome weight table consulted by the off-ledger draw service.
/// Weights sum to 100; on-ledger code validates and stores, nothing else.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RateTiers {
    pub w1: u32,
    pub w2: u32,
    pub w3: u32,
    pub w4: u32,
    pub w5: u32,
}

/// One ticket purchase. Records are append-only per buyer and never mutated;
/// `unit_price` snapshots the configured price at purchase time.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct TicketPurchase {
    pub id: u32,
    pub quantity: u32,
    pub unit_price: i128,
}

/// Storage keys. Claim consumption uses Claimed(kind, claimant, nonce);
/// reward-token and collection mints are tracked in RewardBalance and
/// NftBalance/NftOwner/NftSupply; ticket purchases use TicketCount/Ticket.
#[contracttype]
pub enum DataKey {
    /// Global admin address; set once at initialize.
    Admin,
    /// Current RewardConfig; replaced wholesale by configure.
    Config,
    /// Current RateTiers; replaced wholesale by set_rate.
    Rates,
    /// Capability grant for (holder, capability).
    Role(Address, Capability),
    /// Consumed-claim marker for (kind, claimant, nonce). Written exactly
    /// once, never deleted.
    Claimed(ClaimKind, Address, u64),
    /// Whitelist flag set by whitelist claims.
    Whitelist(Address),
    /// Minted reward-token balance per holder.
    RewardBalance(Address),
    /// Number of collection items held per address.
    NftBalance(Address),
    /// Collection item owner by sequential item id.
    NftOwner(u64),
    /// Total collection items minted; the next item id.
    NftSupply,
    /// Number of ticket purchases per buyer; the next sequence id.
    TicketCount(Address),
    /// Ticket purchase record for (buyer, sequence id).
    Ticket(Address, u32),
}

/// Maximum collection items mintable by a single claim.
/// Keeps compute costs predictable within Soroban limits.
const MAX_NFT_PER_CLAIM: i128 = 50;

/// Required sum of the five outcome weights.
const RATE_TOTAL: u64 = 100;

// ── Contract ─────────────────────────────────────────────────
#[contract]
pub struct PrizeWheel;

#[contractimpl]
impl PrizeWheel {
    /// Auth + admin check shared by every configuration entry point.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), WheelError> {
        caller.require_auth();
        let admin: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(WheelError::NotInitialized)?;
        if *caller != admin {
            return Err(WheelError::Unauthorized);
        }
        Ok(())
    }

    fn config_or_err(env: &Env) -> Result<RewardConfig, WheelError> {
        env.storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(WheelError::NotInitialized)
    }

    /// Input validation: require amount > 0 for prices and transfers.
    fn require_positive_amount(amount: i128) -> Result<(), WheelError> {
        if amount <= 0 {
            return Err(WheelError::InvalidAmount);
        }
        Ok(())
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Record the admin address. Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), WheelError> {
        if env.storage().persistent().has(&DataKey::Admin) {
            return Err(WheelError::AlreadyInitialized);
        }
        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.events().publish((EVENT_INIT, admin), ());
        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Admin)
    }

    // ── Configuration ─────────────────────────────────────────

    /// Replace the reward configuration wholesale (admin only). There is no
    /// partial-update path, so a half-configured state is never observable.
    ///
    /// Returns `Err(WheelError::InvalidAmount)` if `ticket_price` is not
    /// positive.
    pub fn configure(
        env: Env,
        caller: Address,
        admin_signer: BytesN<20>,
        ticket_price: i128,
        payment_token: Address,
    ) -> Result<(), WheelError> {
        Self::require_admin(&env, &caller)?;
        Self::require_positive_amount(ticket_price)?;

        let config = RewardConfig {
            admin_signer: admin_signer.clone(),
            ticket_price,
            payment_token: payment_token.clone(),
        };
        env.storage().persistent().set(&DataKey::Config, &config);

        env.events().publish(
            (EVENT_CONFIG_SET, caller),
            (admin_signer, ticket_price, payment_token),
        );
        Ok(())
    }

    pub fn get_config(env: Env) -> Option<RewardConfig> {
        env.storage().persistent().get(&DataKey::Config)
    }

    /// Replace the five outcome weights wholesale (admin only).
    ///
    /// Returns `Err(WheelError::InvalidRate)` unless the weights sum to 100;
    /// nothing is stored on rejection.
    pub fn set_rate(
        env: Env,
        caller: Address,
        w1: u32,
        w2: u32,
        w3: u32,
        w4: u32,
        w5: u32,
    ) -> Result<(), WheelError> {
        Self::require_admin(&env, &caller)?;

        // Summed in u64: five u32 weights can wrap a u32.
        let total = w1 as u64 + w2 as u64 + w3 as u64 + w4 as u64 + w5 as u64;
        if total != RATE_TOTAL {
            return Err(WheelError::InvalidRate);
        }

        let rates = RateTiers { w1, w2, w3, w4, w5 };
        env.storage().persistent().set(&DataKey::Rates, &rates);

        env.events()
            .publish((EVENT_RATE_SET, caller), (w1, w2, w3, w4, w5));
        Ok(())
    }

    pub fn get_rate(env: Env) -> Option<RateTiers> {
        env.storage().persistent().get(&DataKey::Rates)
    }

    // ── Roles ─────────────────────────────────────────────────

    /// Grant a capability to an address (admin only). The deploy fixture
    /// grants Minter to the contract's own address so mintable claim kinds
    /// can settle.
    pub fn grant_role(
        env: Env,
        caller: Address,
        target: Address,
        capability: Capability,
    ) -> Result<(), WheelError> {
        Self::require_admin(&env, &caller)?;
        env.storage()
            .persistent()
            .set(&DataKey::Role(target.clone(), capability), &true);
        env.events()
            .publish((EVENT_ROLE_GRANTED, target), capability);
        Ok(())
    }

    /// Revoke a capability from an address (admin only). Idempotent.
    pub fn revoke_role(
        env: Env,
        caller: Address,
        target: Address,
        capability: Capability,
    ) -> Result<(), WheelError> {
        Self::require_admin(&env, &caller)?;
        env.storage()
            .persistent()
            .remove(&DataKey::Role(target.clone(), capability));
        env.events()
            .publish((EVENT_ROLE_REVOKED, target), capability);
        Ok(())
    }

    /// The only read path settlement uses before minting.
    pub fn has_role(env: Env, holder: Address, capability: Capability) -> bool {
        env.storage()
            .persistent()
            .get::<DataKey, bool>(&DataKey::Role(holder, capability))
            .unwrap_or(false)
    }

    // ── Claims ────────────────────────────────────────────────

    fn domain_separator(kind: ClaimKind) -> &'static [u8] {
        match kind {
            ClaimKind::Token => DOMAIN_CLAIM_TOKEN,
            ClaimKind::StableCoin => DOMAIN_CLAIM_STABLE_COIN,
            ClaimKind::Nft => DOMAIN_CLAIM_NFT,
            ClaimKind::Whitelist => DOMAIN_CLAIM_WHITELIST,
        }
    }

    /// Validate the amount shape for a kind. Whitelist claims carry no
    /// amount; every other kind needs a positive one, and collection mints
    /// are capped at MAX_NFT_PER_CLAIM items.
    fn claim_amount(kind: ClaimKind, amount: Option<i128>) -> Result<Option<i128>, WheelError> {
        match kind {
            ClaimKind::Whitelist => match amount {
                None => Ok(None),
                Some(_) => Err(WheelError::InvalidAmount),
            },
            ClaimKind::Nft => {
                let amount = amount.ok_or(WheelError::InvalidAmount)?;
                if amount <= 0 || amount > MAX_NFT_PER_CLAIM {
                    return Err(WheelError::InvalidAmount);
                }
                Ok(Some(amount))
            }
            _ => {
                let amount = amount.ok_or(WheelError::InvalidAmount)?;
                Self::require_positive_amount(amount)?;
                Ok(Some(amount))
            }
        }
    }

    /// Packed signing preimage: domain || nonce (8-byte BE) || claimant XDR
    /// || amount (16-byte BE, omitted for whitelist). Field order and widths
    /// are fixed; changing any field changes the digest.
    fn claim_preimage(
        env: &Env,
        kind: ClaimKind,
        nonce: u64,
        claimant: &Address,
        amount: Option<i128>,
    ) -> Bytes {
        let mut preimage = Bytes::new(env);
        preimage.extend_from_slice(Self::domain_separator(kind));
        preimage.extend_from_slice(&nonce.to_be_bytes());
        preimage.append(&claimant.clone().to_xdr(env));
        if let Some(amount) = amount {
            preimage.extend_from_slice(&amount.to_be_bytes());
        }
        preimage
    }

    /// Ethereum-style signer identity: keccak-256 of the 64-byte curve point
    /// (uncompressed SEC-1 key minus the tag byte), last 20 bytes.
    fn signer_address(env: &Env, public_key: &BytesN<65>) -> BytesN<20> {
        let point = Bytes::from(public_key.clone()).slice(1..);
        let digest: BytesN<32> = env.crypto().keccak256(&point).into();
        let mut address = [0u8; 20];
        Bytes::from(digest).slice(12..).copy_into_slice(&mut address);
        BytesN::from_array(env, &address)
    }

    /// True iff the signature over `preimage` recovers to `expected`.
    /// Malformed inputs read as a mismatch, never as a trap: the signature
    /// length is enforced by the BytesN type, and recovery ids outside
    /// {0, 1} are rejected before touching the host.
    fn signature_matches(
        env: &Env,
        expected: &BytesN<20>,
        preimage: &Bytes,
        signature: &BytesN<64>,
        recovery_id: u32,
    ) -> bool {
        if recovery_id > 1 {
            return false;
        }
        let digest = env.crypto().keccak256(preimage);
        let public_key = env
            .crypto()
            .secp256k1_recover(&digest, signature, recovery_id);
        Self::signer_address(env, &public_key) == *expected
    }

    /// Atomic test-and-set on the consumed-claim key. Unclaimed -> Claimed
    /// is terminal; the key is never deleted.
    fn consume_claim(
        env: &Env,
        kind: ClaimKind,
        claimant: &Address,
        nonce: u64,
    ) -> Result<(), WheelError> {
        let key = DataKey::Claimed(kind, claimant.clone(), nonce);
        if env.storage().persistent().has(&key) {
            return Err(WheelError::AlreadyClaimed);
        }
        env.storage().persistent().set(&key, &true);
        Ok(())
    }

    /// Mintable kinds settle only while the contract's own address holds
    /// the Minter capability.
    fn require_minter(env: &Env) -> Result<(), WheelError> {
        let minter = Self::has_role(
            env.clone(),
            env.current_contract_address(),
            Capability::Minter,
        );
        if !minter {
            return Err(WheelError::Unauthorized);
        }
        Ok(())
    }

    fn settle_token(env: &Env, claimant: &Address, amount: i128) -> Result<(), WheelError> {
        Self::require_minter(env)?;
        let key = DataKey::RewardBalance(claimant.clone());
        let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        let credited = balance.checked_add(amount).ok_or(WheelError::Overflow)?;
        env.storage().persistent().set(&key, &credited);
        Ok(())
    }

    fn settle_stable_coin(
        env: &Env,
        config: &RewardConfig,
        claimant: &Address,
        amount: i128,
    ) -> Result<(), WheelError> {
        let contract_addr = env.current_contract_address();
        let client = token::Client::new(env, &config.payment_token);
        if client.balance(&contract_addr) < amount {
            return Err(WheelError::NotEnoughBalance);
        }
        client.transfer(&contract_addr, claimant, &amount);
        Ok(())
    }

    /// Mint `amount` sequential collection items to the claimant. Returns
    /// the first minted item id.
    fn settle_nft(env: &Env, claimant: &Address, amount: i128) -> Result<u64, WheelError> {
        Self::require_minter(env)?;
        // claim_amount bounds amount to 1..=MAX_NFT_PER_CLAIM
        let count = amount as u32;
        let supply: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::NftSupply)
            .unwrap_or(0);
        let end = supply
            .checked_add(u64::from(count))
            .ok_or(WheelError::Overflow)?;
        for id in supply..end {
            env.storage().persistent().set(&DataKey::NftOwner(id), claimant);
        }
        env.storage().persistent().set(&DataKey::NftSupply, &end);

        let balance_key = DataKey::NftBalance(claimant.clone());
        let balance: u32 = env.storage().persistent().get(&balance_key).unwrap_or(0);
        let credited = balance.checked_add(count).ok_or(WheelError::Overflow)?;
        env.storage().persistent().set(&balance_key, &credited);
        Ok(supply)
    }

    fn settle_whitelist(env: &Env, claimant: &Address) {
        env.storage()
            .persistent()
            .set(&DataKey::Whitelist(claimant.clone()), &true);
    }

    /// Redeem a signed reward claim.
    ///
    /// The off-ledger authority signs keccak-256 over the packed tuple
    /// `domain || nonce || claimant || amount` (amount omitted for
    /// whitelist); the claimant submits that signature here.
    ///
    /// Order of operations:
    /// - claimant auth (host panic without it), config load, amount shape;
    /// - signature check: `Err(NotPermitted)` unless it recovers to the
    ///   configured authority;
    /// - replay check: `Err(AlreadyClaimed)` if (kind, claimant, nonce) was
    ///   consumed before;
    /// - kind-specific settlement, then the kind event plus `claimed`.
    ///
    /// Any failure aborts the whole invocation with no state change.
    pub fn claim(
        env: Env,
        claimant: Address,
        kind: ClaimKind,
        nonce: u64,
        amount: Option<i128>,
        signature: BytesN<64>,
        recovery_id: u32,
    ) -> Result<(), WheelError> {
        claimant.require_auth();

        let config = Self::config_or_err(&env)?;
        let amount = Self::claim_amount(kind, amount)?;

        let preimage = Self::claim_preimage(&env, kind, nonce, &claimant, amount);
        if !Self::signature_matches(
            &env,
            &config.admin_signer,
            &preimage,
            &signature,
            recovery_id,
        ) {
            return Err(WheelError::NotPermitted);
        }

        // Consume the key before settlement: a re-entering claim with the
        // same key must already observe it as spent.
        Self::consume_claim(&env, kind, &claimant, nonce)?;

        match kind {
            ClaimKind::Token => {
                let amount = amount.ok_or(WheelError::InvalidAmount)?;
                Self::settle_token(&env, &claimant, amount)?;
                env.events()
                    .publish((EVENT_CLAIMED_TOKEN, claimant.clone()), (nonce, amount));
            }
            ClaimKind::StableCoin => {
                let amount = amount.ok_or(WheelError::InvalidAmount)?;
                Self::settle_stable_coin(&env, &config, &claimant, amount)?;
                env.events()
                    .publish((EVENT_CLAIMED_STABLE, claimant.clone()), (nonce, amount));
            }
            ClaimKind::Nft => {
                let amount = amount.ok_or(WheelError::InvalidAmount)?;
                let first_id = Self::settle_nft(&env, &claimant, amount)?;
                env.events().publish(
                    (EVENT_CLAIMED_NFT, claimant.clone()),
                    (nonce, amount, first_id),
                );
            }
            ClaimKind::Whitelist => {
                Self::settle_whitelist(&env, &claimant);
                env.events()
                    .publish((EVENT_CLAIMED_WHITELIST, claimant.clone()), (nonce, true));
            }
        }

        env.events().publish((EVENT_CLAIMED, claimant), (kind, nonce));
        Ok(())
    }

    /// Report whether a claim tuple's signature recovers to the configured
    /// authority, without consuming anything. Same amount-shape rules as
    /// `claim`.
    pub fn verify_claim(
        env: Env,
        claimant: Address,
        kind: ClaimKind,
        nonce: u64,
        amount: Option<i128>,
        signature: BytesN<64>,
        recovery_id: u32,
    ) -> Result<bool, WheelError> {
        let config = Self::config_or_err(&env)?;
        let amount = Self::claim_amount(kind, amount)?;
        let preimage = Self::claim_preimage(&env, kind, nonce, &claimant, amount);
        Ok(Self::signature_matches(
            &env,
            &config.admin_signer,
            &preimage,
            &signature,
            recovery_id,
        ))
    }

    /// Digest preview: exactly the bytes the off-ledger authority must sign
    /// for the given tuple.
    pub fn message_hash(
        env: Env,
        claimant: Address,
        kind: ClaimKind,
        nonce: u64,
        amount: Option<i128>,
    ) -> BytesN<32> {
        let preimage = Self::claim_preimage(&env, kind, nonce, &claimant, amount);
        env.crypto().keccak256(&preimage).into()
    }

    pub fn is_claimed(env: Env, kind: ClaimKind, claimant: Address, nonce: u64) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Claimed(kind, claimant, nonce))
    }

    pub fn is_whitelisted(env: Env, who: Address) -> bool {
        env.storage()
            .persistent()
            .get::<DataKey, bool>(&DataKey::Whitelist(who))
            .unwrap_or(false)
    }

    /// Minted reward-token balance of `owner` (0 if none).
    pub fn reward_balance(env: Env, owner: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::RewardBalance(owner))
            .unwrap_or(0)
    }

    /// Number of collection items held by `owner` (0 if none).
    pub fn nft_balance(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::NftBalance(owner))
            .unwrap_or(0)
    }

    pub fn nft_owner(env: Env, id: u64) -> Option<Address> {
        env.storage().persistent().get(&DataKey::NftOwner(id))
    }

    /// Total collection items minted so far.
    pub fn nft_supply(env: Env) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::NftSupply)
            .unwrap_or(0)
    }

    // ── Tickets ───────────────────────────────────────────────

    /// Buy `quantity` tickets at the configured price, paying exactly
    /// `paid_amount` of the payment token into the contract.
    ///
    /// Returns `Err(WheelError::NotEnoughBalance)` when the payment is short
    /// and `Err(WheelError::InvalidPayment)` when it overshoots; the due
    /// total is `ticket_price * quantity`, matched exactly. On success the
    /// purchase record gets the buyer's next sequence id, starting at 0.
    pub fn buy_ticket(
        env: Env,
        buyer: Address,
        quantity: u32,
        paid_amount: i128,
    ) -> Result<TicketPurchase, WheelError> {
        buyer.require_auth();

        let config = Self::config_or_err(&env)?;
        if quantity == 0 {
            return Err(WheelError::InvalidAmount);
        }
        let due = config
            .ticket_price
            .checked_mul(i128::from(quantity))
            .ok_or(WheelError::Overflow)?;
        if paid_amount < due {
            return Err(WheelError::NotEnoughBalance);
        }
        if paid_amount > due {
            return Err(WheelError::InvalidPayment);
        }

        let contract_addr = env.current_contract_address();
        token::Client::new(&env, &config.payment_token).transfer(
            &buyer,
            &contract_addr,
            &paid_amount,
        );

        let count_key = DataKey::TicketCount(buyer.clone());
        let id: u32 = env.storage().persistent().get(&count_key).unwrap_or(0);
        let next = id.checked_add(1).ok_or(WheelError::Overflow)?;
        let purchase = TicketPurchase {
            id,
            quantity,
            unit_price: config.ticket_price,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Ticket(buyer.clone(), id), &purchase);
        env.storage().persistent().set(&count_key, &next);

        env.events().publish(
            (EVENT_BUY_TICKET, buyer),
            (id, quantity, config.ticket_price),
        );
        Ok(purchase)
    }

    /// Fetch one purchase record by buyer and sequence id.
    pub fn get_ticket(env: Env, buyer: Address, index: u32) -> Option<TicketPurchase> {
        env.storage()
            .persistent()
            .get(&DataKey::Ticket(buyer, index))
    }

    /// Number of purchases made by `buyer`.
    pub fn get_ticket_count(env: Env, buyer: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::TicketCount(buyer))
            .unwrap_or(0)
    }
}

mod test_auth;
