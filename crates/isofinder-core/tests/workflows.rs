use isofinder::core::calibration::profile::{CalibrationProfile, CalibrationProfileBuilder};
use isofinder::core::io::reference::from_csv_reader;
use isofinder::core::models::decay::DecayMode;
use isofinder::core::models::result::Stability;
use isofinder::core::models::tables::{ElementTable, KnownMedicalTable};
use isofinder::engine::config::{SearchConfig, SearchConfigBuilder};
use isofinder::engine::error::EngineError;
use isofinder::engine::progress::{Progress, ProgressReporter};
use isofinder::workflows::{crosscheck, estimate, search, validate};
use std::sync::Mutex;

#[test]
fn estimates_are_bitwise_deterministic_over_a_grid() {
    let profile = CalibrationProfile::standard();
    for z in 0..=100 {
        for n in 0..=160 {
            if z + n == 0 {
                continue;
            }
            let first = estimate::estimate_binding_energy(z, n, &profile).unwrap();
            let second = estimate::estimate_binding_energy(z, n, &profile).unwrap();
            assert!(first.is_finite(), "non-finite estimate for Z={z}, N={n}");
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }
}

#[test]
fn stability_score_stays_in_unit_interval() {
    let profile = CalibrationProfile::standard();
    for z in 1..=118 {
        for n in 0..=180 {
            let Stability { score, .. } = estimate::classify_stability(z, n, &profile).unwrap();
            assert!((0.0..=1.0).contains(&score), "score {score} for Z={z}, N={n}");
        }
    }
}

#[test]
fn pinned_values_survive_the_public_api() {
    let profile = CalibrationProfile::standard();
    assert_eq!(estimate::estimate_binding_energy(2, 2, &profile).unwrap(), 28.296);
    assert_eq!(estimate::estimate_binding_energy(1, 1, &profile).unwrap(), 2.225);
    assert_eq!(
        estimate::classify_stability(6, 6, &profile).unwrap(),
        Stability::new(0.8, DecayMode::Stable)
    );
    assert_eq!(
        estimate::classify_stability(0, 5, &profile).unwrap(),
        Stability::new(0.0, DecayMode::Impossible)
    );
}

#[test]
fn negative_input_is_rejected_before_any_arithmetic() {
    let profile = CalibrationProfile::standard();
    assert!(matches!(
        estimate::evaluate(-1, 0, &profile),
        Err(EngineError::Isotope { .. })
    ));
}

#[test]
fn standard_search_honours_ranking_contract() {
    let profile = CalibrationProfile::standard();
    let result = search::run(&profile, &SearchConfig::standard(), &ProgressReporter::new()).unwrap();

    assert!(result.candidates.len() <= 20);
    let mut seen_unknown = false;
    for candidate in &result.candidates {
        if candidate.is_known_medical {
            assert!(!seen_unknown, "known candidate ranked after an unknown one");
            assert_eq!(candidate.stability_score(), 0.4);
        } else {
            seen_unknown = true;
        }
    }

    let unknown: Vec<f64> = result
        .candidates
        .iter()
        .filter(|c| !c.is_known_medical)
        .map(|c| (c.stability_score() - 0.4).abs())
        .collect();
    assert!(unknown.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn search_is_repeatable() {
    let profile = CalibrationProfile::standard();
    let config = SearchConfig::standard();
    let a = search::run(&profile, &config, &ProgressReporter::new()).unwrap();
    let b = search::run(&profile, &config, &ProgressReporter::new()).unwrap();
    assert_eq!(a.candidates, b.candidates);
    assert_eq!(a.summary, b.summary);
}

#[test]
fn search_reports_phases_and_progress() {
    let profile = CalibrationProfile::standard();
    let config = SearchConfig::standard();
    let phases = Mutex::new(Vec::new());
    let increments = Mutex::new(0u64);
    let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
        Progress::PhaseStart { name } => phases.lock().unwrap().push(name),
        Progress::TaskIncrement => *increments.lock().unwrap() += 1,
        _ => {}
    }));

    search::run(&profile, &config, &reporter).unwrap();
    drop(reporter);

    assert_eq!(phases.into_inner().unwrap(), ["Isotope Sweep", "Ranking"]);
    assert_eq!(increments.into_inner().unwrap(), config.elements.len() as u64);
}

#[test]
fn custom_tables_and_limits_flow_through_the_search() {
    let mut known = KnownMedicalTable::new();
    known.insert("Tc", 99, "SPECT imaging");
    let config = SearchConfigBuilder::new()
        .elements(ElementTable::from_iter([("Tc", 43)]))
        .known_medical(known)
        .max_candidates(3)
        .build()
        .unwrap();

    let result = search::run(
        &CalibrationProfile::standard(),
        &config,
        &ProgressReporter::new(),
    )
    .unwrap();
    assert!(result.candidates.len() <= 3);
    assert_eq!(result.candidates[0].label(), "Tc-99");
    assert_eq!(result.candidates[0].medical_use, "SPECT imaging");
    assert_eq!(result.summary.identification_accuracy_percent(), Some(100.0));
}

#[test]
fn validation_average_is_mean_of_six_records() {
    let report = validate::validate_accuracy(&CalibrationProfile::standard());
    assert_eq!(report.records.len(), 6);
    let mean = report
        .records
        .iter()
        .map(|r| r.percent_error.unwrap())
        .sum::<f64>()
        / 6.0;
    assert!((report.average_percent_error.unwrap() - mean).abs() < 1e-9);
}

#[test]
fn modified_calibration_changes_formula_estimates_only() {
    let tweaked = CalibrationProfileBuilder::new().volume(16.0).build().unwrap();
    let standard = CalibrationProfile::standard();

    assert_eq!(
        estimate::estimate_binding_energy(2, 2, &tweaked).unwrap(),
        estimate::estimate_binding_energy(2, 2, &standard).unwrap()
    );
    assert!(
        estimate::estimate_binding_energy(26, 30, &tweaked).unwrap()
            > estimate::estimate_binding_energy(26, 30, &standard).unwrap()
    );
}

#[test]
fn crosscheck_of_search_against_reference_dataset() {
    let dataset = from_csv_reader(
        "label,z,n,binding-energy,stable,half-life\n\
         F-18,9,9,137.369,false,1.83\n\
         Co-60,27,33,524.8,false,46200\n\
         Y-90,39,51,782.4,false,64.1\n"
            .as_bytes(),
    )
    .unwrap();
    let profile = CalibrationProfile::standard();
    let result = search::run(&profile, &SearchConfig::standard(), &ProgressReporter::new()).unwrap();
    let report = crosscheck::cross_check(&result.candidates, &dataset, &profile);

    assert_eq!(report.total_predictions, result.candidates.len());
    assert_eq!(report.matched, 3);
    assert!(report.binding_energy_accuracy.is_some());

    let agreement = crosscheck::stability_agreement(&dataset, &profile);
    assert_eq!(agreement.evaluated, 3);
}
