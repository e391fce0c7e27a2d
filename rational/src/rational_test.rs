use crate::{Field, Operand, Rational, RationalError};

fn rat(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

#[test]
fn always_lowest_terms() {
    for n in -24..=24 {
        for d in (-24..=24).filter(|d| *d != 0) {
            let r = rat(n, d);
            assert!(r.denom() > 0, "{}/{} -> {:?}", n, d, r);
            let (mut a, mut b) = (r.numer().abs(), r.denom());
            while b != 0 {
                let t = a % b;
                a = b;
                b = t;
            }
            assert_eq!(a, 1, "{}/{} -> {:?}", n, d, r);
            // same value as the unreduced pair
            assert_eq!(r.numer() * d, n * r.denom());
        }
    }
}

#[test]
fn lowest_terms_at_the_edges() {
    assert_eq!(Rational::new(i64::MIN, i64::MIN), Ok(rat(1, 1)));
    assert_eq!(Rational::new(i64::MAX, i64::MAX), Ok(rat(1, 1)));
    assert_eq!(Rational::new(i64::MIN, -1), Err(RationalError::Overflow));
    assert_eq!(Rational::new(1, i64::MIN), Err(RationalError::Overflow));
    assert_eq!(Rational::new(2, i64::MIN), Ok(rat(-1, 1 << 62)));

    let half = Rational::new(i64::MIN, 2).unwrap();
    assert_eq!((half.numer(), half.denom()), (-4611686018427387904, 1));
    // coprime, so the denominator cannot be made positive within i64
    assert_eq!(Rational::new(i64::MAX, i64::MIN), Err(RationalError::Overflow));
}

#[test]
fn failed_mutation_keeps_value() {
    let mut r = Rational::from_integer(i64::MIN);
    assert_eq!(r.set_denom(-1), Err(RationalError::Overflow));
    assert_eq!((r.numer(), r.denom()), (i64::MIN, 1));
    assert_eq!(r.set(Field::Denom, 0), Err(RationalError::DivisionByZero));
    assert_eq!(r, Rational::from_integer(i64::MIN));
}

#[test]
fn sign_on_numerator() {
    assert_eq!(rat(6, 8).to_string(), "3/4");
    assert_eq!(rat(-6, 8).to_string(), "-3/4");
    assert_eq!(rat(6, -8).to_string(), "-3/4");
    assert_eq!(rat(-6, -8).to_string(), "3/4");
    assert_eq!(rat(0, -5), Rational::default());
}

#[test]
fn zero_denominator() {
    assert_eq!(Rational::new(1, 0), Err(RationalError::DivisionByZero));
    assert_eq!("3/0".parse::<Rational>(), Err(RationalError::DivisionByZero));
}

#[test]
fn parse_strings() {
    let five = "5".parse::<Rational>().unwrap();
    assert_eq!((five.numer(), five.denom()), (5, 1));
    assert_eq!(five.to_string(), "5");
    assert_eq!("10/-4".parse::<Rational>(), Ok(rat(-5, 2)));
    assert_eq!(" 1 / 3 ".parse::<Rational>(), Ok(rat(1, 3)));
    assert_eq!(
        "1/2/3".parse::<Rational>(),
        Err(RationalError::InvalidFormat("1/2/3".to_string()))
    );
    match "abc".parse::<Rational>() {
        Err(RationalError::ParseError { token, .. }) => assert_eq!(token, "abc"),
        other => panic!("expected ParseError, got {:?}", other),
    }
    assert!(matches!(
        "1.5".parse::<Rational>(),
        Err(RationalError::ParseError { .. })
    ));
    assert!(matches!(
        "1/x".parse::<Rational>(),
        Err(RationalError::ParseError { .. })
    ));
}

#[test]
fn display_then_parse() {
    for r in [rat(3, 4), rat(-7, 3), rat(42, 1), rat(0, 9), rat(i64::MAX, 2)] {
        assert_eq!(r.to_string().parse::<Rational>(), Ok(r));
    }
}

#[test]
fn arithmetic() {
    assert_eq!(rat(1, 2).checked_add(rat(1, 3)), Ok(rat(5, 6)));
    assert_eq!(rat(1, 2).checked_sub(rat(1, 3)), Ok(rat(1, 6)));
    assert_eq!(rat(2, 3).checked_mul(rat(3, 4)), Ok(rat(1, 2)));
    assert_eq!(rat(1, 2).checked_div(rat(1, 4)), Ok(rat(2, 1)));
    assert_eq!(rat(1, 2).checked_div(rat(-1, 4)), Ok(rat(-2, 1)));
    assert_eq!(
        rat(1, 2).checked_div(rat(0, 1)),
        Err(RationalError::DivisionByZero)
    );
    assert_eq!(rat(1, 2).checked_div(0i64), Err(RationalError::DivisionByZero));
}

#[test]
fn integer_operands() {
    assert_eq!(rat(1, 2).checked_add(1i64), Ok(rat(3, 2)));
    assert_eq!(rat(1, 2).checked_mul(4i64), Ok(rat(2, 1)));
    assert_eq!(rat(1, 2) + 1i64, Ok(rat(3, 2)));
    assert_eq!(1i64 + rat(1, 2), Ok(rat(3, 2)));
    assert_eq!(3i64 * rat(1, 6), Ok(rat(1, 2)));
    assert_eq!(rat(1, 2) - rat(1, 2), Ok(Rational::default()));
    assert_eq!(rat(3, 4) / rat(3, 2), Ok(rat(1, 2)));
}

#[test]
fn reversed_operands_keep_operand_order() {
    // integer on the left really is the left operand
    assert_eq!(2i64 - rat(1, 2), Ok(rat(3, 2)));
    assert_eq!(rat(1, 2) - 2i64, Ok(rat(-3, 2)));
    assert_eq!(2i64 / rat(1, 2), Ok(rat(4, 1)));
    assert_eq!(rat(1, 2) / 2i64, Ok(rat(1, 4)));
    assert_eq!(rat(1, 2).checked_rsub(2i64), Ok(rat(3, 2)));
    assert_eq!(rat(1, 2).checked_rdiv(2i64), Ok(rat(4, 1)));
    assert_eq!(1i64 / Rational::default(), Err(RationalError::DivisionByZero));
}

#[test]
fn overflow_is_an_error() {
    let big = rat(i64::MAX, 1);
    assert_eq!(big.checked_add(1i64), Err(RationalError::Overflow));
    assert_eq!(big.checked_mul(2i64), Err(RationalError::Overflow));
    assert_eq!(rat(i64::MIN, 1).checked_div(-1i64), Err(RationalError::Overflow));
    // reduction brings the result back in range
    assert_eq!(big.checked_mul(rat(1, i64::MAX)), Ok(rat(1, 1)));
}

#[test]
fn float_value() {
    assert_eq!(rat(1, 4).to_f64(), 0.25);
    assert_eq!(format!("{:.6}", rat(1, 3).to_f64()), "0.333333");
    assert_eq!(format!("{:.6}", rat(-2, 3).to_f64()), "-0.666667");
}

#[test]
fn field_access() {
    let mut r = rat(3, 4);
    assert_eq!(r.get(Field::Numer), 3);
    assert_eq!(r.get("d".parse::<Field>().unwrap()), 4);

    r.set_numer(2).unwrap();
    assert_eq!(r, rat(1, 2));
    r.set_denom(-4).unwrap();
    assert_eq!((r.numer(), r.denom()), (-1, 4));
    r.set(Field::Numer, 6).unwrap();
    assert_eq!((r.numer(), r.denom()), (3, 2));

    assert_eq!(r.set_denom(0), Err(RationalError::DivisionByZero));
    assert_eq!(r, rat(3, 2));
    assert_eq!(
        "x".parse::<Field>(),
        Err(RationalError::InvalidKey("x".to_string()))
    );
}

#[test]
fn operand_literals() {
    assert_eq!("7".parse::<Operand>(), Ok(Operand::Int(7)));
    assert_eq!("-7".parse::<Operand>(), Ok(Operand::Int(-7)));
    assert_eq!("2/4".parse::<Operand>(), Ok(Operand::Frac(rat(1, 2))));
    assert_eq!(Operand::Int(3).into_rational(), rat(3, 1));
    assert!("(".parse::<Operand>().is_err());
}
