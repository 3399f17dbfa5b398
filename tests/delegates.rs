//! Handler chains over shared state.

use lazyq::prelude::*;

fn toggle(value: &mut bool) {
    *value = !*value;
}

#[test]
fn single_toggle() {
    let mut chain: Multicast<bool> = Multicast::new();
    chain += toggle;
    let mut value = true;
    chain.invoke(&mut value).unwrap();
    assert!(!value);
}

#[test]
fn multicast_runs_in_registration_order() {
    let mut toggles: Multicast<bool> = Multicast::new();
    toggles += toggle;
    toggles += toggle;
    toggles += toggle;
    toggles += |b: &mut bool| *b = !*b;

    let mut value = true;
    toggles.invoke(&mut value).unwrap();
    assert!(value);
}

#[test]
fn divide_by_zero_aborts_the_chain() {
    #[derive(Debug, Default)]
    struct Calc {
        x: i32,
        y: i32,
        results: Vec<i32>,
    }

    let mut calc: Multicast<Calc> = Multicast::new();
    calc.register(|c: &mut Calc| c.results.push(c.x + c.y))
        .register(|c: &mut Calc| c.results.push(c.x - c.y))
        .register(|c: &mut Calc| c.results.push(c.x * c.y))
        .try_register(|c: &mut Calc| -> std::result::Result<(), String> {
            let q = c.x.checked_div(c.y).ok_or_else(|| "divide by zero".to_owned())?;
            c.results.push(q);
            Ok(())
        })
        .register(|c: &mut Calc| c.results.clear());

    let mut ok = Calc { x: 6, y: 3, ..Calc::default() };
    calc.invoke(&mut ok).unwrap();
    assert!(ok.results.is_empty());

    let mut zero = Calc { x: 6, y: 0, ..Calc::default() };
    let err = calc.invoke(&mut zero).unwrap_err();
    assert!(matches!(err, QueryError::HandlerFailure { index: 3, .. }));
    assert_eq!(zero.results, vec![6, 6, 0]);
}
