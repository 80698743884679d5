use crate::{GenerationError, GenerationRequest};
use rand::Rng;

/// Draws a password using the thread-local CSPRNG.
pub fn generate(request: &GenerationRequest) -> Result<String, GenerationError> {
    generate_with(request, &mut rand::thread_rng())
}

pub fn generate_with<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<String, GenerationError> {
    if request.length == 0 {
        return Err(GenerationError::InvalidLength);
    }
    let pool = request.pool();
    if pool.is_empty() {
        return Err(GenerationError::NoCharacterClassSelected);
    }

    tracing::debug!(
        length = request.length,
        pool = pool.len(),
        "generating password"
    );

    Ok((0..request.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn zero_length_checked_before_pool() {
        let mut req = GenerationRequest::new(0);
        req.include_upper = false;
        req.include_lower = false;
        req.include_digits = false;
        req.include_symbols = false;
        assert_eq!(generate(&req), Err(GenerationError::InvalidLength));
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let req = GenerationRequest::new(32);
        let a = generate_with(&req, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_with(&req, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }
}
