use std::fs;
use std::path::Path;
use std::process::Command;

const PRODUCTS: &str = "\
1;Product1;10.00
2;Product2;20.00
3;Product3;543.21
";

const SALESMEN: &str = "\
CC;1001;John;Smith
CC;1002;Jane;Doe
CC;1003;Mia;Lopez
";

const EXPECTED_SALES_REPORT: &str = "\
Jane Doe;1126.42
John Smith;130.00
Mia Lopez;0.00
";

const EXPECTED_PRODUCTS_REPORT: &str = "\
Product1;10.00
Product2;20.00
Product3;543.21
";

fn write(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).expect("Failed to create directory");
    fs::write(path, contents).expect("Failed to write input file");
}

#[test]
fn test_sales_report_binary() {
    let bin_path = env!("CARGO_BIN_EXE_sales_report");
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");

    write(dir.path(), "products.txt", PRODUCTS);
    write(dir.path(), "salesmen.txt", SALESMEN);
    write(dir.path(), "sales/Salesman1_1001.txt", "CC;1001\n1;7;\n2;3;\n");
    write(dir.path(), "sales/east/2024/Salesman2_1002.txt", "CC;1002\n3;2;\n1;4;\n99;5;\n");
    write(dir.path(), "sales/Unknown_4242.txt", "CC;4242\n1;100;\n");
    write(dir.path(), "sales/Broken_1003.txt", "CC;1003\n1;lots;\n");
    write(dir.path(), "sales/readme.md", "CC;1003\n1;1000;\n");

    let output = Command::new(bin_path)
        .arg(dir.path())
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(),
        "Binary failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr));

    let sales_report = fs::read_to_string(dir.path().join("sales_report.txt"))
        .expect("Sales report was not written");
    let products_report = fs::read_to_string(dir.path().join("products_report.txt"))
        .expect("Products report was not written");

    assert_eq!(sales_report, EXPECTED_SALES_REPORT);
    assert_eq!(products_report, EXPECTED_PRODUCTS_REPORT);
}

#[test]
fn test_missing_inputs_fail() {
    let bin_path = env!("CARGO_BIN_EXE_sales_report");
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");

    let output = Command::new(bin_path)
        .arg(dir.path())
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(!dir.path().join("sales_report.txt").exists());
}

#[test]
fn test_generate_then_report() {
    let bin_path = env!("CARGO_BIN_EXE_sales_report");
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");

    let generated = Command::new(bin_path)
        .arg("generate")
        .arg(dir.path())
        .output()
        .expect("Failed to execute binary");
    assert!(generated.status.success(),
        "Generation failed with stderr: {}",
        String::from_utf8_lossy(&generated.stderr));

    let output = Command::new(bin_path)
        .arg(dir.path())
        .output()
        .expect("Failed to execute binary");
    assert!(output.status.success(),
        "Binary failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr));

    let sales_report = fs::read_to_string(dir.path().join("sales_report.txt")).unwrap();
    let products_report = fs::read_to_string(dir.path().join("products_report.txt")).unwrap();
    assert_eq!(sales_report.lines().count(), 5);
    assert_eq!(products_report.lines().count(), 10);

    let totals: Vec<f64> = sales_report
        .lines()
        .map(|line| line.rsplit(';').next().unwrap().parse().unwrap())
        .collect();
    assert!(totals.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(totals.iter().all(|&total| total > 0.0));
}
