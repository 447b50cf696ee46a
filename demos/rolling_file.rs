//! Rolling checksum over a file.
//!
//! Run with:
//!     RUST_LOG=rollbuf=debug cargo run --example rolling_file -- /path/to/file

use std::env;

use rollbuf::WindowConfig;
use tracing_subscriber::EnvFilter;

const WINDOW: usize = 48;

// Adler-style weak checksum, as used for rsync block matching
struct Rolling {
    a: u32,
    b: u32,
    len: u32,
}

impl Rolling {
    fn new(window: &[u8]) -> Self {
        let mut a = 0u32;
        let mut b = 0u32;
        for &byte in window {
            a = a.wrapping_add(byte as u32);
            b = b.wrapping_add(a);
        }
        Self {
            a,
            b,
            len: window.len() as u32,
        }
    }

    fn roll(&mut self, out: u8, inc: u8) {
        self.a = self.a.wrapping_sub(out as u32).wrapping_add(inc as u32);
        self.b = self
            .b
            .wrapping_sub(self.len.wrapping_mul(out as u32))
            .wrapping_add(self.a);
    }

    fn digest(&self) -> u32 {
        (self.b << 16) | (self.a & 0xffff)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Rolling over file: {}\n", path);

    let config = WindowConfig::new(16 * 1024, WINDOW)?;
    let mut buf = rollbuf::open(&path, config)?;

    let Some(window) = buf.get_window()? else {
        println!("Empty file, nothing to roll");
        return Ok(());
    };
    let mut sum = Rolling::new(window);
    let mut ring = window.to_vec();
    println!(
        "Window: {} bytes, first checksum={:08x}",
        ring.len(),
        sum.digest()
    );

    let mut head = 0;
    let mut rolls = 0u64;
    let mut zeros = 0u64;
    while let Some(byte) = buf.get_next()? {
        sum.roll(ring[head], byte);
        ring[head] = byte;
        head = (head + 1) % ring.len();
        rolls += 1;

        // Cheap content-defined boundary count
        if sum.digest() & 0x0fff == 0 {
            zeros += 1;
        }
    }

    println!("\nTotal: {} rolls, final checksum={:08x}", rolls, sum.digest());
    println!("Boundary candidates: {}", zeros);
    println!("Buffer state: {}", buf.state());

    Ok(())
}
