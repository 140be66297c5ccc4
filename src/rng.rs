//! Random sources for obstacle generation and level colors.

/// Uniform `f64` in `[0, 1)`, the only randomness the game needs.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

// 53 significant bits -> [0, 1)
fn unit_f64(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Deterministic xorshift64* generator. Same seed, same run.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }
}

/// Entropy from the platform (`crypto.getRandomValues` in the browser).
/// If the platform source fails, a clock-seeded generator takes over for the
/// rest of the run.
#[derive(Clone, Debug, Default)]
pub struct OsRandom {
    fallback: Option<SeededRandom>,
}

impl OsRandom {
    pub fn new() -> Self {
        Self { fallback: None }
    }

    fn fallback_f64(&mut self) -> f64 {
        self.fallback
            .get_or_insert_with(|| {
                console_log!("getrandom unavailable; falling back to a clock-seeded generator");
                SeededRandom::new(clock_seed())
            })
            .next_f64()
    }
}

impl RandomSource for OsRandom {
    fn next_f64(&mut self) -> f64 {
        if self.fallback.is_some() {
            return self.fallback_f64();
        }
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => unit_f64(u64::from_le_bytes(buf)),
            Err(_) => self.fallback_f64(),
        }
    }
}

// performance.now() in the browser, wall-clock nanos elsewhere
#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    (now * 1000.0) as u64 ^ 0xA076_1D64_78BD_642F
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
        ^ 0xA076_1D64_78BD_642F
}
