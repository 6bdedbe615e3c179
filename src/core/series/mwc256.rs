use rand::{Error, RngCore, SeedableRng};

const DEFAULT_SEED: u32 = 123456789;

/// MWC256 random number generator.
///
/// Marsaglia's lag-256 multiply-with-carry generator from the DIEHARD suite.
/// It is small, fast and fully reproducible from a 32-bit seed, which makes it
/// the source of choice whenever a synthetic series has to be replayed.
#[derive(Debug, Clone)]
pub struct Mwc256 {
    q: [u32; 256],
    carry: u32,
    i: u8,
}

impl Mwc256 {
    /// Create a generator from a 32-bit seed
    pub fn with_seed(seed: u32) -> Self {
        let mut q = [0u32; 256];
        let mut j = seed;

        for q_val in &mut q {
            j = j.wrapping_mul(69069).wrapping_add(12345);
            *q_val = j;
        }

        Self {
            q,
            carry: 362436,
            i: 255,
        }
    }

    /// Generate a random u32
    pub fn rand32(&mut self) -> u32 {
        const A: u64 = 809430660;

        self.i = self.i.wrapping_add(1);
        let t = A * (self.q[self.i as usize] as u64) + (self.carry as u64);
        self.carry = (t >> 32) as u32;
        self.q[self.i as usize] = (t & 0xFFFFFFFF) as u32;
        self.q[self.i as usize]
    }
}

impl Default for Mwc256 {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl RngCore for Mwc256 {
    fn next_u32(&mut self) -> u32 {
        self.rand32()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.rand32() as u64;
        let hi = self.rand32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.rand32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mwc256 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u32::from_le_bytes(seed))
    }
}
