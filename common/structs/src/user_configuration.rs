multiversx_sc::imports!();

/// Borrowing bits are the even positions of every pair.
const BORROWING_MASK_BYTE: u8 = 0x55;
/// Collateral bits are the odd positions of every pair.
const COLLATERAL_MASK_BYTE: u8 = 0xAA;
const MASK_BYTES: usize = 32;

/// Per user bitmap with two bits per reserve id.
///
/// Bit `2 * id` flags an outstanding borrow of reserve `id`, bit `2 * id + 1` flags that the
/// user's supply of reserve `id` counts as collateral. The whole map lives in one word, which
/// bounds the number of reserves at 128.
#[derive(Clone)]
pub struct UserConfiguration<M: ManagedTypeApi> {
    data: BigUint<M>,
}

impl<M: ManagedTypeApi> UserConfiguration<M> {
    pub fn new(data: BigUint<M>) -> Self {
        UserConfiguration { data }
    }

    pub fn data(&self) -> &BigUint<M> {
        &self.data
    }

    pub fn into_data(self) -> BigUint<M> {
        self.data
    }

    pub fn set_borrowing(&mut self, reserve_id: u32, borrowing: bool) {
        self.set_bit(Self::borrowing_position(reserve_id), borrowing);
    }

    pub fn set_using_as_collateral(&mut self, reserve_id: u32, using_as_collateral: bool) {
        self.set_bit(Self::collateral_position(reserve_id), using_as_collateral);
    }

    pub fn is_borrowing(&self, reserve_id: u32) -> bool {
        self.is_bit_set(Self::borrowing_position(reserve_id))
    }

    pub fn is_using_as_collateral(&self, reserve_id: u32) -> bool {
        self.is_bit_set(Self::collateral_position(reserve_id))
    }

    pub fn is_using_as_collateral_or_borrowing(&self, reserve_id: u32) -> bool {
        let shifted = &self.data >> Self::borrowing_position(reserve_id);
        (&shifted & &BigUint::from(3u64)) != BigUint::zero()
    }

    pub fn is_borrowing_any(&self) -> bool {
        self.masked(BORROWING_MASK_BYTE) != BigUint::zero()
    }

    pub fn is_using_as_collateral_any(&self) -> bool {
        self.masked(COLLATERAL_MASK_BYTE) != BigUint::zero()
    }

    pub fn is_borrowing_one(&self) -> bool {
        Self::has_single_bit(&self.masked(BORROWING_MASK_BYTE))
    }

    pub fn is_using_as_collateral_one(&self) -> bool {
        Self::has_single_bit(&self.masked(COLLATERAL_MASK_BYTE))
    }

    pub fn is_empty(&self) -> bool {
        self.data == BigUint::zero()
    }

    /// True while some reserve with id `>= reserve_id` still has a flag set.
    pub fn has_flags_from(&self, reserve_id: u32) -> bool {
        (&self.data >> Self::borrowing_position(reserve_id)) != BigUint::zero()
    }

    /// Lowest reserve id flagged as collateral.
    pub fn first_collateral_id(&self) -> Option<u32> {
        Self::first_id(self.masked(COLLATERAL_MASK_BYTE))
    }

    /// Lowest reserve id flagged as borrowed.
    pub fn first_borrowed_id(&self) -> Option<u32> {
        Self::first_id(self.masked(BORROWING_MASK_BYTE))
    }

    /// Detects isolation mode.
    ///
    /// The user is isolated only when exactly one reserve is flagged as collateral and that reserve
    /// has a non zero debt ceiling, as reported by `debt_ceiling_of(reserve_id)`. Zero collateral
    /// flags, or more than one, never isolate.
    ///
    /// # Returns
    /// - `Option<(u32, u64)>`: The isolated collateral id and its debt ceiling.
    pub fn get_isolation_mode_state<F>(&self, debt_ceiling_of: F) -> Option<(u32, u64)>
    where
        F: FnOnce(u32) -> u64,
    {
        if !self.is_using_as_collateral_one() {
            return None;
        }

        let reserve_id = self.first_collateral_id()?;
        let debt_ceiling = debt_ceiling_of(reserve_id);
        if debt_ceiling == 0 {
            return None;
        }

        Some((reserve_id, debt_ceiling))
    }

    fn borrowing_position(reserve_id: u32) -> usize {
        (reserve_id as usize) << 1
    }

    fn collateral_position(reserve_id: u32) -> usize {
        ((reserve_id as usize) << 1) + 1
    }

    fn bit(position: usize) -> BigUint<M> {
        BigUint::from(1u64) << position
    }

    fn is_bit_set(&self, position: usize) -> bool {
        (&self.data & &Self::bit(position)) != BigUint::zero()
    }

    fn set_bit(&mut self, position: usize, value: bool) {
        let bit = Self::bit(position);
        let already_set = (&self.data & &bit) != BigUint::zero();
        if value && !already_set {
            self.data += &bit;
        } else if !value && already_set {
            self.data -= &bit;
        }
    }

    fn masked(&self, mask_byte: u8) -> BigUint<M> {
        let mask = BigUint::from_bytes_be(&[mask_byte; MASK_BYTES]);
        &self.data & &mask
    }

    fn has_single_bit(value: &BigUint<M>) -> bool {
        if value == &BigUint::zero() {
            return false;
        }

        let below = value - &BigUint::from(1u64);
        (value & &below) == BigUint::zero()
    }

    fn first_id(masked: BigUint<M>) -> Option<u32> {
        let pair_mask = BigUint::from(3u64);
        let mut rest = masked;
        let mut reserve_id = 0u32;
        while rest != BigUint::zero() {
            if (&rest & &pair_mask) != BigUint::zero() {
                return Some(reserve_id);
            }
            rest >>= 2;
            reserve_id += 1;
        }

        None
    }
}
