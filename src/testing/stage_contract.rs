use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and borrowed.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Whether `needs_apply` predicts a change exactly, rather than only
    /// never missing one.
    fn exact_needs_apply() -> bool {
        true
    }

    fn skip_idempotency() -> bool {
        false
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → `needs_apply` never misses a change
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        let stage = $stage;
        $crate::testing::stage_contract::zero_copy_when_no_changes(&stage);
        $crate::testing::stage_contract::stage_is_idempotent(&stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii(&stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&stage);
    };
}

/// Inputs that no stage is allowed to change.
const MUST_NOT_TOUCH: &[&str] = &["", "hello", "world123"];

fn run<'a, S: Stage>(stage: &S, text: &'a str) -> Cow<'a, str> {
    if stage.needs_apply(text).expect("needs_apply errored") {
        stage.apply(text).expect("apply errored")
    } else {
        Cow::Borrowed(text)
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for &input in S::samples() {
        let once = run(stage, input);
        if once == input {
            assert_eq!(
                input.as_ptr(),
                once.as_ptr(),
                "stage `{}` allocated without changing `{input}`",
                stage.name()
            );
        }

        // Second pass over clean text must never allocate.
        if !S::skip_idempotency() {
            let twice = run(stage, &once);
            assert!(
                matches!(twice, Cow::Borrowed(s) if s.as_ptr() == once.as_ptr()),
                "zero-copy violated on second pass of `{}` (input: `{input}`)",
                stage.name()
            );
        }
    }

    for &pass_through in S::should_pass_through() {
        let out = run(stage, pass_through);
        assert_eq!(out.as_ref(), pass_through);
        assert!(
            matches!(out, Cow::Borrowed(s) if s.as_ptr() == pass_through.as_ptr()),
            "zero-copy violated on pass-through sample of `{}` (input: `{pass_through}`)",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        assert_eq!(run(stage, input).as_ref(), expected, "stage `{}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    if S::skip_idempotency() {
        return;
    }
    let inputs = S::samples()
        .iter()
        .chain(S::should_transform().iter().map(|(input, _)| input));
    for &input in inputs {
        let once = run(stage, input).into_owned();
        let twice = run(stage, &once).into_owned();
        assert_eq!(once, twice, "stage `{}` not idempotent on `{input}`", stage.name());
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .chain(S::should_transform().iter().map(|(input, _)| input))
        .chain(MUST_NOT_TOUCH);
    for &input in inputs {
        check_accuracy(stage, input);
    }
}

fn check_accuracy<S: StageTestConfig>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input).expect("needs_apply errored");
    let output = stage.apply(input).expect("apply errored");
    let actually_changes = output != input;
    if S::exact_needs_apply() {
        assert_eq!(
            predicted,
            actually_changes,
            "needs_apply() mismatch for stage `{}` on `{input}` (output = {output:?})",
            stage.name()
        );
    } else {
        assert!(
            predicted || !actually_changes,
            "needs_apply() missed a change for stage `{}` on `{input}` (output = {output:?})",
            stage.name()
        );
    }
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: &S) {
    assert_eq!(run(stage, "").as_ref(), "");
    let ascii = "hello world 123";
    assert_eq!(run(stage, ascii).as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let _ = run(
        stage,
        "Hello 世界 русский Türkçe العربية 简体中文 👍🏽 \u{0}\u{9f} <b>x</b> a@b.co www.x.y",
    );
}
