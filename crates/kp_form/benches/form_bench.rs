use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kp_form::{AnswerSet, FormConfig, FormSession, StalePolicy, StructuredAnswers, aggregate, derive, visible_questions};

fn full_answers() -> AnswerSet {
    let mut set: AnswerSet = [
        ("q1_houseNo", "7"),
        ("q2_subLord", "Venus"),
        ("q3_subLordRetro", "Direct"),
        ("q4_star", "Rohini"),
        ("q5_starLord", "Moon"),
        ("q6_starLordRetro", "Direct"),
        ("q7_starLordHouses", "2, 7, [11]"),
        ("q9_isSubLordConjunct", "Yes"),
        ("q33_isStarLordConjunct", "Yes"),
        ("q57_isSubLordOpposed", "Yes"),
        ("q81_isStarLordOpposed", "Yes"),
    ]
    .into_iter()
    .collect();
    let planets = ["Sun", "Mars", "Jupiter", "Saturn", "Rahu"];
    for (list_key, first) in [
        ("q10_conjunctPlanets", 11),
        ("q34_starLordConjunctPlanets", 35),
        ("q58_opposedPlanets", 59),
        ("q82_starLordOpposedPlanets", 83),
    ] {
        set.set(list_key, planets.iter().map(|p| p.to_string()).collect::<Vec<_>>());
        for slot in 0..5 {
            let n = first + slot * 4;
            set.set(format!("q{n}_retro"), if slot % 2 == 0 { "Direct" } else { "Retrograde" });
            set.set(format!("q{}_starLord", n + 1), "Mercury");
            set.set(format!("q{}_retro", n + 2), "Direct");
            set.set(format!("q{}_sig", n + 3), format!("{}, {}, [{}]", slot + 1, slot + 6, slot + 3));
        }
    }
    set
}

fn aggregate_bench(c: &mut Criterion) {
    let inputs = ["1, 5, [2]", "5, 10, [2, 6]", "12, [11]", "3 8 (9) 11", "[4], 7"];

    let mut group = c.benchmark_group("signification");
    group.bench_function("aggregate_5", |b| b.iter(|| aggregate(black_box(inputs))));
    group.finish();
}

fn derive_bench(c: &mut Criterion) {
    let set = full_answers();
    let retain = FormConfig::default();
    let mask = FormConfig::with_policy(StalePolicy::Mask);

    let mut group = c.benchmark_group("derive");
    group.bench_function("full_retain", |b| b.iter(|| derive(black_box(&set), &retain)));
    group.bench_function("full_mask", |b| b.iter(|| derive(black_box(&set), &mask)));
    group.bench_function("visible_questions", |b| {
        b.iter(|| visible_questions(&StructuredAnswers::from_answer_set(black_box(&set))))
    });
    group.finish();
}

fn session_bench(c: &mut Criterion) {
    let mut session = FormSession::with_answers(full_answers(), FormConfig::default())
        .expect("bench answers are valid");

    let mut group = c.benchmark_group("session");
    group.bench_function("set_signification", |b| {
        b.iter(|| session.set_text("q14_sig", black_box("4, 9, [1]")))
    });
    group.finish();
}

criterion_group!(benches, aggregate_bench, derive_bench, session_bench);
criterion_main!(benches);
