//! Randomized round trips of present values.

#[cfg(test)]
mod tests {
    use nnz::{
        Nullable,
        types::{Bool, Float64, Int, Int64, Str, Time, time::OffsetDateTime},
    };
    use nnz_test::round_trip;
    use rand::{Rng, SeedableRng, distr::Alphanumeric};
    use rand_xoshiro::Xoshiro256PlusPlus;

    const CASES: usize = 500;

    fn rng() -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(0x6e6e7a)
    }

    #[test]
    fn integers() -> anyhow::Result<()> {
        let mut rng = rng();
        for _ in 0..CASES {
            let v: i32 = rng.random();
            if v != 0 {
                round_trip(&Int(v))?;
            }
            let v: i64 = rng.random();
            if v != 0 {
                round_trip(&Int64(v))?;
            }
        }
        Ok(())
    }

    #[test]
    fn floats() -> anyhow::Result<()> {
        let mut rng = rng();
        for _ in 0..CASES {
            let v = f64::from_bits(rng.random());
            if v.is_finite() && v != 0.0 {
                round_trip(&Float64(v))?;
            }
        }
        Ok(())
    }

    #[test]
    fn strings() -> anyhow::Result<()> {
        let mut rng = rng();
        for _ in 0..CASES {
            let len = rng.random_range(1..64);
            let s: String = (&mut rng)
                .sample_iter(Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            round_trip(&Str(s))?;

            let s: String = (0..len).map(|_| rng.random::<char>()).collect();
            round_trip(&Str(s))?;
        }
        round_trip(&Bool(true))?;
        Ok(())
    }

    #[test]
    fn timestamps() -> anyhow::Result<()> {
        let mut rng = rng();
        // 0001-01-01 through 9999-12-31, the range RFC 3339 can express.
        let lo = -62_135_596_800_i64;
        let hi = 253_402_300_799_i64;
        for _ in 0..CASES {
            let secs = rng.random_range(lo..=hi);
            let nanos = rng.random_range(0..1_000_000_000);
            let dt = OffsetDateTime::from_unix_timestamp(secs)?.replace_nanosecond(nanos)?;
            let t = Time(dt);
            if t.is_null() {
                continue;
            }
            round_trip(&t)?;

            let decoded = Time::from_binary(&t.to_binary()?)?;
            assert_eq!(decoded, t);
        }
        Ok(())
    }
}
