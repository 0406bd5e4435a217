//! Integration tests for the validation run.

use std::fs;
use std::path::Path;

use catalog_cli::commands::run_validation;
use catalog_report::REPORT_FILE_NAME;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write csv");
}

fn write_fixture(data: &Path) {
    write(
        data,
        "Catalog.csv",
        "id,name,heading,vatCategory,ratePerHour,rateHalfDay,rateDay,ratePerPerson,ratePerBooking,includedDefault,includedCondition,notes\n\
         C1,Projector,AV,Standard,10,40,70,,,false,,\n\
         C2,Flipchart,AV, Standard ,abc,,,,,false,,\n\
         C3,Catering,Food,Unknown,,,,12.5,,false,,\n",
    );
    write(
        data,
        "Rooms.csv",
        "id,venueId,name,code,description,sizeSqm,heightM,accessible,featuresJSON,imagesJSON,layoutsJSON,baseRateHour,baseRateHalfDay,baseRateDay,colour\n\
         R1,V1,Boardroom,A1,,40,3.2,true,[],[],[],50,180,300,red\n\
         R2,V1,Studio,A1,,60,4,true,[],[],[],60,200,350,blue\n\
         R3,V1,Annex,  ,,20,3,false,[],[],[],30,100,150,green\n",
    );
    write(
        data,
        "RoomCatalogMap.csv",
        "id,roomId,catalogItemId,visibility,basisOverride,rateOverridesJSON,minQty,maxQty,defaultQty,autoSuggest\n\
         M1,R1,C1,visible,,,0,1,1,true\n\
         M2,R9,C2,visible,,,0,1,1,true\n",
    );
    write(data, "VAT.csv", "id,name,ratePercent,appliesToJSON\n1,Standard,20,[]\n");
}

#[test]
fn run_writes_report_for_mixed_input() {
    let dir = TempDir::new().expect("temp dir");
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    write_fixture(&data);

    let report_path = dir.path().join(REPORT_FILE_NAME);
    let result = run_validation(&data, &report_path).expect("run");
    assert_eq!(result.report_path, report_path);
    assert_eq!(result.report.missing_count(), 1);

    let text = fs::read_to_string(&report_path).unwrap();
    insta::assert_snapshot!(text, @r"
    Validation Report

    - Catalog.csv: OK (rows=3, missing=[], extra=[])
    - Rooms.csv: MISMATCH (rows=3, missing=[], extra=['colour'])
    - RoomCatalogMap.csv: OK (rows=2, missing=[], extra=[])
    - VAT.csv: OK (rows=1, missing=[], extra=[])
    - Durations.csv: MISSING
      • Rooms.csv: 1 empty code(s)
      • Rooms.csv: duplicate code(s): ['A1']
      • RoomCatalogMap.csv: 1 unknown roomId(s)
      • Catalog.csv: 1 item(s) reference VAT names not in VAT.csv
      • Catalog.csv: non-numeric values in ratePerHour
    ");
}

#[test]
fn rerun_on_unchanged_input_is_byte_identical() {
    let dir = TempDir::new().expect("temp dir");
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    write_fixture(&data);
    let report_path = dir.path().join(REPORT_FILE_NAME);

    run_validation(&data, &report_path).expect("first run");
    let first = fs::read(&report_path).unwrap();
    run_validation(&data, &report_path).expect("second run");
    let second = fs::read(&report_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_data_dir_reports_every_table_missing() {
    let dir = TempDir::new().expect("temp dir");
    let report_path = dir.path().join(REPORT_FILE_NAME);

    let result = run_validation(&dir.path().join("data"), &report_path).expect("run");
    assert_eq!(result.report.missing_count(), 5);

    let text = fs::read_to_string(&report_path).unwrap();
    assert_eq!(
        text,
        "Validation Report\n\n\
         - Catalog.csv: MISSING\n\
         - Rooms.csv: MISSING\n\
         - RoomCatalogMap.csv: MISSING\n\
         - VAT.csv: MISSING\n\
         - Durations.csv: MISSING"
    );
}

#[test]
fn unwritable_report_path_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let report_path = dir.path().join("missing").join(REPORT_FILE_NAME);

    let error = run_validation(&dir.path().join("data"), &report_path).expect_err("write fails");
    assert!(format!("{error:#}").contains("validation_report.txt"));
}
