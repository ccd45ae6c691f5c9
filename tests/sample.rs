use minibags::prelude::*;


/// Tests for the data containers.
#[cfg(test)]
pub mod sample_tests {
    use super::*;

    #[test]
    fn matrix_rejects_non_binary_entries() {
        let res = FeatureMatrix::from_rows(&[[0.0, 0.5]]);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }


    #[test]
    fn matrix_rejects_ragged_rows() {
        let res = FeatureMatrix::from_rows(
            &[vec![0.0, 1.0], vec![1.0]]
        );
        assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
    }


    #[test]
    fn gather_preserves_draw_order_and_repeats() {
        let x = FeatureMatrix::from_rows(
            &[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
        ).unwrap();
        let r = x.gather(&[2, 0, 2]).unwrap();

        assert_eq!(r.shape(), (3, 2));
        assert_eq!(r.row(0), &[1.0, 1.0]);
        assert_eq!(r.row(1), &[1.0, 0.0]);
        assert_eq!(r.row(2), &[1.0, 1.0]);
    }


    #[test]
    fn labels_must_match_their_encoding() {
        let res = LabelVector::new(vec![0, 1, -1], LabelEncoding::ZeroOne);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));

        let res = LabelVector::new(vec![-1, 1], LabelEncoding::PlusMinus);
        assert!(res.is_ok());
    }


    #[test]
    fn relabel_keeps_the_spam_set() {
        let y = LabelVector::new(
            vec![0, 1, 1, 0], LabelEncoding::ZeroOne
        ).unwrap();
        let z = y.relabel(LabelEncoding::PlusMinus);

        assert_eq!(z.values(), &[-1, 1, 1, -1]);
        for i in 0..y.len() {
            assert_eq!(y.is_spam(i), z.is_spam(i));
        }
    }


    #[test]
    fn sample_rejects_misaligned_labels() {
        let x = FeatureMatrix::from_rows(&[[1.0], [0.0]]).unwrap();
        let y = LabelVector::new(vec![1], LabelEncoding::ZeroOne).unwrap();

        let res = Sample::new(x, y);
        assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
    }
}
