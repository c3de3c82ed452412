//! End-to-end runs of the offline (rule-based) compression path

use elide_core::{RetentionPolicy, RuleTransform};
use elide_pipeline::{size, Pipeline};

#[test]
fn test_offline_compress_all_policies() {
    let text = "The cat sat on the mat and the dog slept by the door. \
                Version 42 shipped with e = mc2 in the release notes.";
    let pipeline = Pipeline::with_transform(RuleTransform);

    for policy in RetentionPolicy::ALL {
        let blob = pipeline.compress(policy, text).unwrap();
        let stripped = elide_codec::decode(&blob).unwrap();
        assert!(
            stripped.len() < text.len(),
            "{} policy did not shrink the text",
            policy
        );
        // Trailing digits survive every policy.
        assert!(stripped.contains("42"));
        assert!(stripped.contains("mc2"));
    }
}

#[test]
fn test_combined_removes_more_than_either_primitive() {
    let text = "one two three four five six seven eight nine ten ".repeat(50);
    let pipeline = Pipeline::with_transform(RuleTransform);

    let letter = pipeline.compress(RetentionPolicy::Letter, &text).unwrap();
    let space = pipeline.compress(RetentionPolicy::Space, &text).unwrap();
    let combined = pipeline.compress(RetentionPolicy::Combined, &text).unwrap();

    let letter_len = elide_codec::decode(&letter).unwrap().len();
    let space_len = elide_codec::decode(&space).unwrap().len();
    let combined_len = elide_codec::decode(&combined).unwrap().len();

    assert!(combined_len < letter_len);
    assert!(combined_len < space_len);
    assert!(size(&combined) > 0);
}
