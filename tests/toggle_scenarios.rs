use coursegraph::models::{Category, Course, CourseStatus};
use coursegraph::{Catalog, Session, ToggleOutcome};

fn two_course_catalog() -> Catalog {
    Catalog::from_courses(vec![
        Course::new("CS1428", "CS 1428", "Foundations of Computer Science I", 4, "Computer Science"),
        Course::new("CS2308", "CS 2308", "Foundations of Computer Science II", 3, "Computer Science")
            .with_prerequisites(&["CS1428"]),
    ])
    .expect("catalog")
}

#[test]
fn test_secuencia_basica_cs1428_cs2308() {
    let mut s = Session::new(two_course_catalog());

    // CS2308 bloqueado: rechazado, nada cambia
    match s.toggle("CS2308") {
        ToggleOutcome::Rejected(n) => {
            assert_eq!(n.unmet_ids(), vec!["CS1428"]);
            assert!(n.message.contains("CS1428"));
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
    assert!(s.completed().is_empty());
    assert_eq!(s.progress().total_completed_credits, 0);

    assert!(s.toggle("CS1428").is_accepted());
    assert_eq!(s.completed().iter().collect::<Vec<_>>(), vec!["CS1428"]);
    assert_eq!(s.progress().total_completed_credits, 4);

    assert!(s.toggle("CS2308").is_accepted());
    assert_eq!(s.completed().iter().collect::<Vec<_>>(), vec!["CS1428", "CS2308"]);
    let report = s.progress();
    assert_eq!(report.total_completed_credits, 7);
    assert_eq!(report.credits_for(Category::ComputerScienceMajor), 7);
}

#[test]
fn test_internship_es_electivo() {
    let catalog = Catalog::from_courses(vec![Course::new(
        "CS4390",
        "CS 4390",
        "Software Engineering Internship",
        3,
        "Computer Science",
    )])
    .unwrap();
    let mut s = Session::new(catalog);
    assert_eq!(s.view("CS4390").map(|v| v.category), Some(Category::Elective));

    s.toggle("CS4390");
    let report = s.progress();
    assert_eq!(report.credits_for(Category::Elective), 3);
    assert_eq!(report.credits_for(Category::ComputerScienceMajor), 0);
}

#[test]
fn test_retraccion_no_en_cascada() {
    let mut s = Session::new(two_course_catalog());
    s.replay(["CS1428", "CS2308"]);

    assert_eq!(
        s.toggle("CS1428"),
        ToggleOutcome::Uncompleted { id: "CS1428".to_string(), credits: 4 }
    );
    assert_eq!(s.status("CS2308"), Some(CourseStatus::Completed));
    assert_eq!(s.status("CS1428"), Some(CourseStatus::Available));
    assert!(!s.prerequisites_met("CS2308"));
    assert_eq!(s.progress().total_completed_credits, 3);

    // la vista marca completado aunque el prerequisito ya no esté
    let v = s.view("CS2308").unwrap();
    assert!(v.completed && !v.prerequisites_met);
}

#[test]
fn test_prerequisito_fuera_del_catalogo_bloquea_siempre() {
    let catalog = Catalog::from_courses(vec![
        Course::new("CS3358", "CS 3358", "Data Structures", 3, "Computer Science").with_prerequisites(&["CS0000"]),
    ])
    .unwrap();
    let mut s = Session::new(catalog);
    match s.toggle("CS3358") {
        ToggleOutcome::Rejected(n) => {
            assert_eq!(n.unmet_ids(), vec!["CS0000"]);
            assert!(n.unmet[0].title.is_none());
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
    // ni siquiera se puede completar el id fantasma
    assert!(matches!(s.toggle("CS0000"), ToggleOutcome::Unknown(_)));
    assert!(s.completed().is_empty());
}

#[test]
fn test_catalogo_de_referencia_cadena_completa() {
    let mut s = Session::new(coursegraph::catalog::builtin_catalog().unwrap());
    let outcomes = s.replay(["CS2318", "CS1428", "CS2308", "CS2318", "MATH2471"]);
    let accepted: Vec<bool> = outcomes.iter().map(|o| o.is_accepted()).collect();
    assert_eq!(accepted, vec![false, true, true, true, true]);

    let report = s.progress();
    assert_eq!(report.total_completed_credits, 14);
    assert_eq!(report.credits_for(Category::ComputerScienceMajor), 10);
    assert_eq!(report.credits_for(Category::Math), 4);
    assert!((report.degree_ratio - 14.0 / 120.0).abs() < 1e-12);
}
