//! End-to-end OTFDEC pre-encryption pipeline.
//!
//! Usage: `encrypt <input.bin> <output.bin> [key_hex] [iv_hex] [skip_bytes]`
//!
//! Defaults match the reference board configuration: a 1024-byte MCUboot
//! header is stripped and the image is encrypted with the whole-buffer
//! stream-counter strategy.

use std::env;
use std::process;

use otfkit::Result;
use otfkit::crypto::otfdec::encrypt_stream;
use otfkit::image;
use otfkit::keys::{parse_iv, parse_key};

const DEFAULT_KEY: &str = "210FEDCBA9876543210FEDCBA9876543";
const DEFAULT_IV: &str = "55555555111111110000A5A519000040";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: encrypt <input.bin> <output.bin> [key_hex] [iv_hex] [skip_bytes]");
        process::exit(1);
    }

    let key_hex = args.get(3).map(String::as_str).unwrap_or(DEFAULT_KEY);
    let iv_hex = args.get(4).map(String::as_str).unwrap_or(DEFAULT_IV);
    let skip: usize = args.get(5).and_then(|s| s.parse().ok()).unwrap_or(1024);

    let key = parse_key(key_hex)?;
    let iv = parse_iv(iv_hex)?;

    let plaintext = image::load_image(&args[1], skip)?;
    println!("plaintext: {} bytes (skipped {skip}-byte header)", plaintext.len());

    let ciphertext = encrypt_stream(&key, &iv, &plaintext);
    println!(
        "ciphertext: {} bytes ({} bytes padding)",
        ciphertext.len(),
        ciphertext.len() - plaintext.len()
    );

    image::write_image(&args[2], &ciphertext)?;
    println!("wrote {}", args[2]);

    Ok(())
}
