use minibags::prelude::*;


/// Tests for the bootstrap resampler.
#[cfg(test)]
pub mod bootstrap_tests {
    use super::*;

    #[test]
    fn output_length_equals_n_draws() {
        let mut bootstrap = Bootstrap::new(0);
        for n_draws in [1, 7, 1000] {
            let ix = bootstrap.sample_indices(10, n_draws).unwrap();
            assert_eq!(ix.len(), n_draws);
            assert!(ix.iter().all(|&i| i < 10));
        }
    }


    #[test]
    fn draws_are_roughly_uniform() {
        let mut bootstrap = Bootstrap::new(777);
        let ix = bootstrap.sample_indices(10, 1000).unwrap();

        let mut freq = [0usize; 10];
        for i in ix {
            freq[i] += 1;
        }

        // Expected frequency is 100 per index;
        // the binomial standard deviation is ~9.5.
        for f in freq {
            assert!((50..=160).contains(&f), "frequency {f} out of bounds");
        }
    }


    #[test]
    fn rejects_empty_source_and_zero_draws() {
        let mut bootstrap = Bootstrap::new(0);
        assert!(matches!(
            bootstrap.sample_indices(0, 5),
            Err(Error::InvalidArgument(_)),
        ));
        assert!(matches!(
            bootstrap.sample_indices(5, 0),
            Err(Error::InvalidArgument(_)),
        ));

        let x = FeatureMatrix::from_rows(&[[1.0], [0.0]]).unwrap();
        assert!(matches!(
            bootstrap.replicates(&x, 2, 0),
            Err(Error::InvalidArgument(_)),
        ));
    }


    #[test]
    fn same_seed_same_replicates() {
        let x = FeatureMatrix::from_rows(
            &[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]]
        ).unwrap();

        let a = Bootstrap::new(42).replicates(&x, 4, 3).unwrap();
        let b = Bootstrap::new(42).replicates(&x, 4, 3).unwrap();
        assert_eq!(a, b);
    }


    #[test]
    fn replicate_sample_keeps_rows_and_labels_aligned() {
        // Label each row by its first feature,
        // so alignment is visible after resampling.
        let sample = Sample::from_raw(
            &[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]],
            vec![1, 0, 1, 0],
            LabelEncoding::ZeroOne,
        ).unwrap();

        let mut bootstrap = Bootstrap::new(3);
        let replicate = bootstrap.replicate_sample(&sample, 16).unwrap();

        assert_eq!(replicate.shape(), (16, 2));
        for i in 0..16 {
            let (x, y) = replicate.at(i);
            assert_eq!(x[0] as i8, y);
        }
    }
}
