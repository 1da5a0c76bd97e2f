use skipset::{SkipSet, options::SkipSetOptions, prelude::DefaultComparator};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let set = SkipSet::new(4, |a: &i32, b: &i32| a == b, |a: &i32, b: &i32| a > b);
    for v in [5, 7, 3, 11, 1] {
        set.insert(v);
    }
    set.remove(&5);

    println!("len: {}, contains 7: {}", set.len(), set.contains(&7));
    set.range(&2, |i, v| {
        println!("#{i}: {v}");
        true
    });

    let seeded = SkipSetOptions::new()
        .max_levels(3)
        .seed(7)
        .build(DefaultComparator::<u32>::default())
        .expect("build skip set failed");
    for v in 0..8 {
        seeded.insert(v);
    }
    println!("{seeded}");
}
