//! Password generation.

use zeroize::Zeroize;

use super::charset::{self, Class};
use super::{GenerateError, GenerationConfig};
use crate::entropy::RandomSource;

/// Fill draws allowed per output character before repeats are force-appended.
pub const MAX_DRAWS_PER_CHAR: usize = 5;

/// Generate a single password.
///
/// The length is drawn uniformly from `min_length..=max_length`. With
/// `ensure_one_of_each`, one character of every enabled class that survives
/// exclusion is seeded before the fill. The buffer is shuffled last, so a
/// password built with `no_consecutive_repeats` may still contain adjacent
/// duplicates.
pub fn generate<R>(config: &GenerationConfig, rng: &mut R) -> Result<String, GenerateError>
where
    R: RandomSource + ?Sized,
{
    config.validate()?;

    let mut pool = charset::build(config);
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    let length = config.min_length + rng.below(config.max_length - config.min_length + 1);
    log::debug!("pool of {} chars, length {}", pool.len(), length);

    let mut buf: Vec<char> = Vec::with_capacity(length);

    if config.ensure_one_of_each {
        seed_classes(config, length, rng, &mut buf);
    }

    fill(&pool, length, config.no_consecutive_repeats, rng, &mut buf);
    shuffle(&mut buf, rng);

    let pass: String = buf.iter().collect();
    buf.zeroize();
    pool.zeroize();
    Ok(pass)
}

/// Generate `count` passwords, each with its own independently drawn length.
pub fn generate_batch<R>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError>
where
    R: RandomSource + ?Sized,
{
    (0..count).map(|_| generate(config, rng)).collect()
}

fn seed_classes<R>(config: &GenerationConfig, length: usize, rng: &mut R, buf: &mut Vec<char>)
where
    R: RandomSource + ?Sized,
{
    for class in Class::ALL {
        if buf.len() >= length {
            log::debug!("length {} too short to seed {:?}", length, class);
            break;
        }
        if !class.is_enabled(config) {
            continue;
        }
        let chars = class.filtered(config);
        if chars.is_empty() {
            log::debug!("{:?} fully excluded, not seeded", class);
            continue;
        }
        buf.push(chars[rng.below(chars.len())]);
    }
}

fn fill<R>(pool: &[char], length: usize, no_repeats: bool, rng: &mut R, buf: &mut Vec<char>)
where
    R: RandomSource + ?Sized,
{
    let budget = length * MAX_DRAWS_PER_CHAR;
    let mut draws = 0;

    while buf.len() < length {
        let c = pool[rng.below(pool.len())];
        draws += 1;

        if no_repeats && buf.last() == Some(&c) {
            if draws < budget {
                continue;
            }
            log::trace!("draw budget of {} spent, forcing repeat", budget);
        }
        buf.push(c);
    }
}

/// Fisher-Yates.
#[inline]
fn shuffle<R>(chars: &mut [char], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in (1..chars.len()).rev() {
        let j = rng.below(i + 1);
        chars.swap(i, j);
    }
}
