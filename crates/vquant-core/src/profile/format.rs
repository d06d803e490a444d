// crates/vquant-core/src/profile/format.rs

use crate::error::{Result, VqError};
use crate::profile::range::{RangeProfile, Shape};

const MAGIC: &[u8; 4] = b"VQP1";
const VERSION: u16 = 1;

/// Bytes after the header fields: crc32 + blake3_16.
const TRAILER_LEN: usize = 4 + 16;

/// Profile file layout (little-endian):
/// MAGIC[4]
/// version:u16
/// shape:u16               (0=Unipolar, 1=Bipolar)
/// full_scale_voltage:f64  (IEEE-754 bits)
/// max_code:u32
/// crc32:u32               (over everything before crc32)
/// blake3_16:[16]          (over everything before blake3)
pub fn encode(p: &RangeProfile) -> Vec<u8> {
    let mut b = Vec::with_capacity(4 + 2 + 2 + 8 + 4 + TRAILER_LEN);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());
    b.extend_from_slice(&shape_bits(p.shape()).to_le_bytes());
    b.extend_from_slice(&p.full_scale_voltage().to_bits().to_le_bytes());
    b.extend_from_slice(&(p.max_code() as u32).to_le_bytes());
    seal(&mut b);
    b
}

pub fn decode(bytes: &[u8]) -> Result<RangeProfile> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(VqError::ProfileFormat("bad magic".into()));
    }
    let mut i = 4usize;

    let version = read_u16(bytes, &mut i)?;
    if version != VERSION {
        return Err(VqError::ProfileFormat(format!("unsupported version {version}")));
    }

    let shape = match read_u16(bytes, &mut i)? {
        0 => Shape::Unipolar,
        1 => Shape::Bipolar,
        other => {
            return Err(VqError::ProfileFormat(format!("unknown shape {other}")));
        }
    };
    let full_scale_voltage = f64::from_bits(read_u64(bytes, &mut i)?);
    let max_code_raw = read_u32(bytes, &mut i)?;

    let body_end = i;
    let crc_expected = read_u32(bytes, &mut i)?;
    if crc_expected != crc32(&bytes[..body_end]) {
        return Err(VqError::ProfileFormat("crc32 mismatch".into()));
    }

    need(bytes, i, 16)?;
    if bytes[i..i + 16] != blake3_16(&bytes[..i]) {
        return Err(VqError::ProfileFormat("blake3 mismatch".into()));
    }
    i += 16;
    if i != bytes.len() {
        return Err(VqError::ProfileFormat(format!(
            "{} trailing bytes",
            bytes.len() - i
        )));
    }

    let max_code = i32::try_from(max_code_raw).map_err(|_| {
        VqError::InvalidProfile(format!("max_code {max_code_raw} exceeds i32::MAX"))
    })?;
    RangeProfile::new(shape, full_scale_voltage, max_code)
}

/// Stable profile identifier: the blake3_16 that `encode()` appends.
pub fn profile_id_16(p: &RangeProfile) -> [u8; 16] {
    let enc = encode(p);
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    out
}

pub fn profile_id_hex(p: &RangeProfile) -> String {
    profile_id_16(p).iter().map(|b| format!("{b:02x}")).collect()
}

/// Appends crc32 over the body, then blake3_16 over body + crc.
fn seal(b: &mut Vec<u8>) {
    let crc = crc32(b);
    b.extend_from_slice(&crc.to_le_bytes());
    let h = blake3_16(b);
    b.extend_from_slice(&h);
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&blake3::hash(bytes).as_bytes()[..16]);
    out
}

fn shape_bits(s: Shape) -> u16 {
    match s {
        Shape::Unipolar => 0,
        Shape::Bipolar => 1,
    }
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(VqError::ProfileFormat("unexpected eof".into()));
    }
    Ok(())
}

fn read_array<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    need(bytes, *i, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*i..*i + N]);
    *i += N;
    Ok(out)
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    read_array(bytes, i).map(u16::from_le_bytes)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    read_array(bytes, i).map(u32::from_le_bytes)
}

fn read_u64(bytes: &[u8], i: &mut usize) -> Result<u64> {
    read_array(bytes, i).map(u64::from_le_bytes)
}
