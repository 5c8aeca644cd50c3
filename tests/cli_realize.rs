use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn command_realize_start() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("qvmodel")?;
    let output = cmd.arg("realize").arg("--model").arg("NoQVs").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.contains("#name\tNoQVsModel.custom\n"));
    assert!(stdout.contains("1\tMismatch\t-10\tfree\n"));
    assert!(stdout.contains("10\tMerge\t-10\tfree\n"));
    assert!(stdout.contains("2\tMismatchS\t0\tfixed\n"));

    Ok(())
}

#[test]
fn command_realize_values() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("qvmodel")?;
    let output = cmd
        .arg("realize")
        .arg("--model")
        .arg("NoQVs")
        .arg("--diagonal-cross")
        .arg("8")
        .arg("--fast-score-threshold")
        .arg("-20")
        .arg("--")
        .arg("-1.5")
        .arg("-2")
        .arg("-3")
        .arg("-4")
        .arg("-5")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.contains("#banding\t8,5\n"));
    assert!(stdout.contains("#fast_score_threshold\t-20\n"));
    assert!(stdout.contains("1\tMismatch\t-1.5\tfree\n"));
    assert!(stdout.contains("3\tBranch\t-2\tfree\n"));
    assert!(stdout.contains("5\tDeletionN\t-3\tfree\n"));
    assert!(stdout.contains("8\tNce\t-4\tfree\n"));
    assert!(stdout.contains("10\tMerge\t-5\tfree\n"));

    Ok(())
}

#[test]
fn command_realize_wrong_count() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("qvmodel")?;
    cmd.arg("realize")
        .arg("--model")
        .arg("NoMergeQV")
        .arg("--")
        .arg("1")
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "NoMergeQVModel takes 11 free parameters, got 2",
        ));

    Ok(())
}

#[test]
fn command_model() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("qvmodel")?;
    let output = cmd.arg("model").arg("NoMergeQV").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("name\tNoMergeQVModel\n"));
    assert!(stdout.contains(
        "required\tInsertionQV,SubstitutionQV,DeletionQV,DeletionTag\n"
    ));
    assert!(stdout.contains("fixed\t11:MergeS,12:Burst,13:BurstS\n"));
    assert!(stdout.contains("start\t0.2627555,-1.09688872,"));

    let mut cmd = Command::cargo_bin("qvmodel")?;
    let output = cmd.arg("model").arg("NoQVs").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("required\t\n"));
    assert!(stdout.contains("free\t1:Mismatch,3:Branch,5:DeletionN,8:Nce,10:Merge\n"));

    Ok(())
}
