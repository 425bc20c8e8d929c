//! Scatter/gather estimator: one task per sample
use crossbeam_channel::bounded;

use crate::sample::ArcSampler;

/// Estimate the area of a circle by scattering one task per sample.
///
/// Spawns exactly `samples` independent tasks, each drawing one point and
/// sending its 0/1 hit indicator into a channel with capacity `samples`, so
/// no producer ever blocks on the collector. The calling frame performs
/// exactly `samples` blocking receives and sums the indicators; receive
/// order is irrelevant because summation is commutative.
///
/// This fans out O(`samples`) concurrent tasks with no bound and no
/// backpressure. That cost is the point of the strategy, not an accident;
/// for a bounded alternative use
/// [`estimate_area_concurrent`](crate::estimate::estimate_area_concurrent).
///
/// `samples == 0` returns `0.0` without spawning.
pub fn estimate_area_parallel(radius: f64, samples: usize) -> f64 {
    if samples == 0 {
        return 0.0;
    }

    let sampler = ArcSampler::new_unchecked(radius);
    let (tx, rx) = bounded::<u64>(samples);

    let hits: u64 = rayon::scope(|s| {
        for _ in 0..samples {
            let tx = tx.clone();
            let sampler = &sampler;
            s.spawn(move |_| {
                let hit = sampler.draw(&mut rand::thread_rng());
                // capacity covers every indicator, so this never blocks
                tx.send(u64::from(hit))
                    .expect("collector outlives the sampling tasks");
            });
        }

        (0..samples)
            .map(|_| rx.recv().expect("every task sends one indicator"))
            .sum()
    });

    (hits as f64 / samples as f64) * 4.0
}
