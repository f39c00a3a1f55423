use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dicewords::{
    dice::{RandomSource, RollSequence},
    generator::{apple_password, PhraseGenerator},
    wordlist::{Dictionary, WordlistStore},
};

fn synthetic_list(dictionary: Dictionary) -> String {
    let params = dictionary.params();
    (0..params.list_len)
        .filter_map(|index| RollSequence::from_index(index, params.rolls_per_word))
        .enumerate()
        .map(|(index, key)| format!("{}\tword{}\n", key, index))
        .collect()
}

fn bench_generation(c: &mut Criterion) {
    let store = WordlistStore::from_sources(
        &synthetic_list(Dictionary::Large),
        &synthetic_list(Dictionary::Short),
        &synthetic_list(Dictionary::ShortUniquePrefix),
    )
    .expect("synthetic lists are well formed");

    let mut source = RandomSource::seeded([0x5eu8; 32]);
    let large = PhraseGenerator::new(&store, Dictionary::Large);
    c.bench_function("large_phrase_6_words", |b| {
        b.iter(|| large.generate(black_box(6), &mut source).unwrap())
    });

    let mut source = RandomSource::seeded([0x5fu8; 32]);
    c.bench_function("apple_password", |b| {
        b.iter(|| apple_password(&mut source).unwrap())
    });

    let mut source = RandomSource::os();
    c.bench_function("large_phrase_6_words_os", |b| {
        b.iter(|| large.generate(black_box(6), &mut source).unwrap())
    });
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
