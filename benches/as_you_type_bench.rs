use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phoneadapter::{CanonicalPhoneNumber, PHONE_ADAPTER, PhoneNumberStyle};
use strum::IntoEnumIterator;

type TestEntity = (&'static str, &'static str);

fn setup_inputs() -> Vec<TestEntity> {
    vec![
        ("16502550100", "US"),
        ("6502550100", "US"),
        ("+442070313000", "US"),
        ("011442070313000", "US"),
        ("0612345678", "IT"),
        ("07911123456", "GB"),
        ("(650) 255-0100", "US"),
    ]
}

fn setup_numbers() -> Vec<CanonicalPhoneNumber> {
    vec![
        CanonicalPhoneNumber::new(1u64, 6502550100u64),
        CanonicalPhoneNumber::new(44u64, 2070313000u64),
        CanonicalPhoneNumber::new(33u64, 612345678u64),
        CanonicalPhoneNumber::new(39u64, "0612345678"),
        CanonicalPhoneNumber::new(1u64, 6502550100u64).with_extension("1234"),
    ]
}

fn as_you_type_benchmark(c: &mut Criterion) {
    let inputs = setup_inputs();

    let mut group = c.benchmark_group("As-you-type");

    group.bench_function("input_digit", |b| {
        b.iter(|| {
            for (input, region) in &inputs {
                let mut formatter = PHONE_ADAPTER.as_you_type_formatter(region).unwrap();
                let mut output = String::new();
                for ch in input.chars() {
                    output = formatter.input_digit(black_box(ch));
                }
                black_box(output);
            }
        })
    });

    group.bench_function("format_as_typed", |b| {
        b.iter(|| {
            for (input, region) in &inputs {
                black_box(
                    PHONE_ADAPTER
                        .format_as_typed(region, black_box(input))
                        .unwrap(),
                );
            }
        })
    });

    group.finish();
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Formatting");

    for style in PhoneNumberStyle::iter() {
        group.bench_function(format!("format_phone_number({:?})", style), |b| {
            b.iter(|| {
                for number in &numbers {
                    black_box(
                        PHONE_ADAPTER
                            .format_phone_number(black_box(number), style)
                            .unwrap(),
                    );
                }
            })
        });
    }

    group.bench_function("validate_phone_number", |b| {
        b.iter(|| {
            for number in &numbers {
                black_box(PHONE_ADAPTER.validate_phone_number(black_box(number), None)).ok();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, as_you_type_benchmark, formatting_benchmark);
criterion_main!(benches);
