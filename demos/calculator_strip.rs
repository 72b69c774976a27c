//! Walks through a calculator strip the way the desktop tool drives it:
//! arrange tokens, commit once, then evaluate whenever the inputs change.

use std::sync::Arc;

use anyhow::Result;
use sigcalc::combinators::{Add, Clamp, Gain, Multiply};
use sigcalc::{
    ConstantSource, OperationBuilder, Producer, Term, TermCombiner, TermExpression, Tier,
    Waveform, WaveformSource,
};

fn main() -> Result<()> {
    // (a + b) * c over three-element arrays
    let program = TermExpression::new()
        .open()
        .term()
        .add()
        .term()
        .close()
        .multiply()
        .term()
        .compile();
    println!("term program: {program}");

    let combiner = TermCombiner::new(3);
    let operands = [
        Term::from(vec![1.0, 2.0, 3.0]),
        Term::from(vec![0.5, 0.5, 0.5]),
        Term::from(vec![2.0, 2.0, 2.0]),
    ];
    println!("(a + b) * c = {:?}", combiner.evaluate(&program, &operands)?);

    let with_zero = [operands[0].clone(), combiner.zero(), combiner.zero()];
    println!("(a + 0) * 0 = {:?}", combiner.evaluate(&program, &with_zero)?);

    // clamp(gain(lfo) * carrier + bias), bound once and re-evaluated
    let carrier = Arc::new(WaveformSource::new(Waveform::new(
        44100.0,
        vec![0.0, 1.0, 0.0, -1.0],
    )));
    let carrier_handle: Producer<Waveform> = carrier.clone();
    let bias = ConstantSource::new(44100.0, 0.25, 4);
    println!("bias level: {}", bias.value());
    let operation = OperationBuilder::new()
        .unary(Tier::First, Clamp { min: -1.0, max: 1.0 })
        .open()
        .unary(Tier::Second, Gain { gain: 0.5 })
        .operand(ConstantSource::new(44100.0, 1.0, 4))
        .binary(Tier::Second, Multiply)
        .shared_operand(carrier_handle)
        .binary(Tier::First, Add)
        .operand(bias)
        .close()
        .build();
    println!("operation program: {}", operation.program());
    println!("first pass: {:?}", operation.current_value()?.samples());

    carrier.replace(Waveform::new(44100.0, vec![2.0, 2.0, -4.0, -4.0]));
    println!("after the carrier changed: {:?}", operation.current_value()?.samples());

    Ok(())
}
