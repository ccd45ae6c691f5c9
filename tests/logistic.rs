use minibags::prelude::*;


/// Tests for logistic regression.
#[cfg(test)]
pub mod logistic_tests {
    use super::*;

    fn separable_sample() -> Sample {
        Sample::from_raw(
            &[[0.0, 0.0], [1.0, 1.0]],
            vec![0, 1],
            LabelEncoding::ZeroOne,
        ).unwrap()
    }


    #[test]
    fn separates_a_separable_sample() {
        let sample = separable_sample();
        let f = LogisticRegression::new()
            .alpha(0.5)
            .epochs(1000)
            .seed(0)
            .fit(&sample)
            .unwrap();

        let predictions = f.predict(sample.features(), true).unwrap();
        assert_eq!(predictions.values(), sample.target().values());
    }


    #[test]
    fn theta_has_a_bias_entry() {
        let sample = separable_sample();
        let f = LogisticRegression::new().fit(&sample).unwrap();

        let n_feature = sample.shape().1;
        assert_eq!(f.theta().len(), n_feature + 1);
    }


    #[test]
    fn hard_and_soft_predictions_agree() {
        let sample = Sample::from_raw(
            &[
                [1.0, 0.0, 1.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 1.0],
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 1.0],
            ],
            vec![1, 0, 1, 0, 1, 0],
            LabelEncoding::ZeroOne,
        ).unwrap();
        let f = LogisticRegression::new()
            .epochs(20)
            .fit(&sample)
            .unwrap();

        let hard = f.predict(sample.features(), true).unwrap();
        let soft = f.predict_soft(sample.features(), true).unwrap();

        for (h, s) in hard.values().iter().zip(soft) {
            assert_eq!(*h == 1, s > 0.5);
        }
    }


    #[test]
    fn same_seed_same_weights() {
        let sample = separable_sample();
        let lr = LogisticRegression::new().seed(99);

        let f = lr.fit(&sample).unwrap();
        let g = lr.fit(&sample).unwrap();
        assert_eq!(f.theta(), g.theta());
    }


    #[test]
    fn rejects_bad_hyperparameters() {
        let sample = separable_sample();

        let res = LogisticRegression::new().alpha(0.0).fit(&sample);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));

        let res = LogisticRegression::new().epochs(0).fit(&sample);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }


    #[test]
    fn rejects_plus_minus_labels() {
        let sample = separable_sample().relabel(LabelEncoding::PlusMinus);
        let res = LogisticRegression::new().fit(&sample);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }


    #[test]
    fn mismatched_width_is_rejected() {
        let sample = separable_sample();
        let f = LogisticRegression::new().fit(&sample).unwrap();

        let wide = FeatureMatrix::from_rows(&[[1.0, 0.0, 1.0]]).unwrap();
        assert!(matches!(
            f.predict(&wide, true),
            Err(Error::DimensionMismatch { .. }),
        ));

        // Without bias augmentation the expected width is `D + 1`.
        let res = f.predict(&wide, false);
        assert!(res.is_ok());
    }


    #[test]
    fn converged_flag_reflects_early_stopping() {
        let sample = separable_sample();

        // Plenty of epochs: the error stops moving long before
        // the budget runs out.
        let f = LogisticRegression::new()
            .epochs(1000)
            .fit(&sample)
            .unwrap();
        assert!(f.converged());
        assert!(f.epochs_run() < 1000);

        // A single epoch cannot trigger the two-epoch comparison.
        let g = LogisticRegression::new()
            .epochs(1)
            .fit(&sample)
            .unwrap();
        assert!(!g.converged());
        assert_eq!(g.epochs_run(), 1);
    }
}
