use minibags::prelude::*;


/// Tests for Bernoulli Naive Bayes.
#[cfg(test)]
pub mod nbayes_tests {
    use super::*;

    fn toy_sample() -> Sample {
        // Fully separable by construction:
        // the label equals the first feature.
        Sample::from_raw(
            &[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]],
            vec![1, 0, 1, 0],
            LabelEncoding::ZeroOne,
        ).unwrap()
    }


    #[test]
    fn refits_its_own_training_labels() {
        let sample = toy_sample();
        let f = NaiveBayes::new().fit(&sample).unwrap();
        let predictions = f.predict_all(sample.features()).unwrap();

        assert_eq!(predictions.values(), sample.target().values());
    }


    #[test]
    fn stabilization_removes_exact_zeros_and_ones() {
        // The first column is all ones, the second all zeros,
        // so the raw likelihoods hit exactly 1 and 0 in both classes.
        let sample = Sample::from_raw(
            &[[1.0, 0.0], [1.0, 0.0], [1.0, 0.0], [1.0, 0.0]],
            vec![0, 1, 0, 1],
            LabelEncoding::ZeroOne,
        ).unwrap();

        let f = NaiveBayes::new().fit(&sample).unwrap();
        let (ham, spam) = f.likelihoods();
        for p in ham.iter().chain(spam) {
            assert!(!p.is_nan());
            assert!(*p > 0.0 && *p < 1.0, "likelihood {p} not stabilized");
        }
    }


    #[test]
    fn priors_sum_to_one() {
        let sample = Sample::from_raw(
            &[[1.0], [1.0], [0.0], [0.0], [0.0], [1.0]],
            vec![1, 1, 0, 0, 0, 1],
            LabelEncoding::ZeroOne,
        ).unwrap();

        let f = NaiveBayes::new().fit(&sample).unwrap();
        let (prior_ham, prior_spam) = f.priors();
        assert_eq!(prior_spam, 0.5);
        assert_eq!(prior_ham + prior_spam, 1.0);
    }


    #[test]
    fn single_class_sample_is_insufficient() {
        let sample = Sample::from_raw(
            &[[1.0], [0.0]],
            vec![1, 1],
            LabelEncoding::ZeroOne,
        ).unwrap();

        let res = NaiveBayes::new().fit(&sample);
        assert!(matches!(res, Err(Error::InsufficientData(_))));
    }


    #[test]
    fn plus_minus_encoding_only_relabels() {
        let zero_one = toy_sample();
        let plus_minus = zero_one.relabel(LabelEncoding::PlusMinus);

        let f = NaiveBayes::new().fit(&zero_one).unwrap();
        let g = NaiveBayes::new()
            .encoding(LabelEncoding::PlusMinus)
            .fit(&plus_minus)
            .unwrap();

        let p = f.predict_all(zero_one.features()).unwrap();
        let q = g.predict_all(plus_minus.features()).unwrap();

        // Same spam calls, different numerals.
        assert_eq!(p.relabel(LabelEncoding::PlusMinus), q);
    }


    #[test]
    fn predictions_are_deterministic() {
        let sample = toy_sample();
        let f = NaiveBayes::new().fit(&sample).unwrap();

        let a = f.predict_all(sample.features()).unwrap();
        let b = f.predict_all(sample.features()).unwrap();
        assert_eq!(a, b);
    }


    #[test]
    fn mismatched_width_is_rejected() {
        let sample = toy_sample();
        let f = NaiveBayes::new().fit(&sample).unwrap();

        let narrow = FeatureMatrix::from_rows(&[[1.0]]).unwrap();
        let res = f.predict_all(&narrow);
        assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
    }


    #[test]
    fn saved_model_predicts_like_the_original() {
        let sample = toy_sample();
        let f = NaiveBayes::new().fit(&sample).unwrap();

        let path = std::env::temp_dir().join("minibags_nbayes_model.json");
        f.save(&path).unwrap();
        let g = NaiveBayesModel::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            f.predict_all(sample.features()).unwrap(),
            g.predict_all(sample.features()).unwrap(),
        );
    }


    #[test]
    fn learner_encoding_must_match_the_sample() {
        let sample = toy_sample();
        let res = NaiveBayes::new()
            .encoding(LabelEncoding::PlusMinus)
            .fit(&sample);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }
}
