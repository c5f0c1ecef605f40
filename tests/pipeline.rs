use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use glosser::analysis::LexiconAnalyzer;
use glosser::corpus::CorpusManager;
use glosser::error::Error;
use glosser::pipeline::{AnnotationPipeline, Pipeline};
use glosser::tagset::TagsetKind;

fn write_article(dir: &Path, id: usize, text: &str) {
    fs::write(dir.join(format!("{}_raw.txt", id)), text).unwrap();
    let meta = format!(
        r#"{{"id":{},"title":"Новость {}","author":["Редакция"],"date":"2023-04-01 10:00:00","url":"https://example.org/news/{}"}}"#,
        id, id, id
    );
    fs::write(dir.join(format!("{}_meta.json", id)), meta).unwrap();
}

fn two_article_corpus(dir: &Path) {
    write_article(dir, 1, "Мама мыла раму. Папа пил чай.");
    write_article(dir, 2, "Кот спал. Пёс лаял.");
}

fn mystem_analyzer() -> LexiconAnalyzer {
    let mut analyzer = LexiconAnalyzer::new(TagsetKind::Mystem);
    for (form, lemma, tag) in [
        ("мама", "мама", "S,fem,anim=sing,nom"),
        ("мыла", "мыть", "V,ipf=praet,sing,indic,fem"),
        ("раму", "рама", "S,fem,inan=acc,sing"),
        ("папа", "папа", "S,masc,anim=sing,nom"),
        ("пил", "пить", "V,ipf=praet,sing,indic,masc"),
        ("чай", "чай", "S,masc,inan=acc,sing"),
        ("кот", "кот", "S,masc,anim=sing,nom"),
        ("спал", "спать", "V,ipf=praet,sing,indic,masc"),
        ("пёс", "пёс", "S,masc,anim=sing,nom"),
        ("лаял", "лаять", "V,ipf=praet,sing,indic,masc"),
    ] {
        analyzer.insert(form, lemma, tag);
    }
    analyzer
}

fn run_extended(src: &Path, dst: &Path) {
    let corpus = CorpusManager::new(src).unwrap();
    let pipeline = AnnotationPipeline::with_morphology(corpus, dst, Box::new(mystem_analyzer()));
    pipeline.run().unwrap();
}

#[test]
fn pipeline_no_folders() {
    let src = Path::new("svdkjljlkmjlmdsfljkf");
    assert!(matches!(
        CorpusManager::new(src),
        Err(Error::DirectoryNotFound(_))
    ));
}

#[test_log::test]
fn extended_run_produces_conllu_per_article() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    two_article_corpus(src.path());
    run_extended(src.path(), dst.path());

    let conllu_files: Vec<_> = fs::read_dir(dst.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "conllu"))
        .collect();
    assert_eq!(conllu_files.len(), 2);

    for id in [1, 2] {
        let content = fs::read_to_string(dst.path().join(format!("{}_sentences.conllu", id))).unwrap();
        let blocks: Vec<&str> = content.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 2, "article {} should have two sentences", id);

        for line in content.lines().filter(|l| !l.starts_with('#') && !l.is_empty()) {
            assert_eq!(
                line.split('\t').count(),
                10,
                "token line must have 10 columns: {:?}",
                line
            );
        }
    }
}

#[test]
fn extended_run_populates_morphology() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    two_article_corpus(src.path());
    run_extended(src.path(), dst.path());

    let content = fs::read_to_string(dst.path().join("1_sentences.conllu")).unwrap();
    let first_token = content
        .lines()
        .find(|l| !l.starts_with('#') && !l.is_empty())
        .unwrap();
    assert_eq!(
        first_token,
        "1\tМама\tмама\tNOUN\t_\tAnimacy=Anim|Case=Nom|Gender=Fem|Number=Sing\t_\t_\t_\t_"
    );

    // terminal punctuation bypasses the analyzer
    assert!(content
        .lines()
        .any(|l| l.starts_with("4\t.\t.\tPUNCT\t_\t_")));
}

#[test]
fn cleaned_files_hold_one_sentence_per_line() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    two_article_corpus(src.path());
    run_extended(src.path(), dst.path());

    let cleaned = fs::read_to_string(dst.path().join("1_cleaned.txt")).unwrap();
    assert_eq!(cleaned, "мама мыла раму\nпапа пил чай\n");
}

#[test]
fn basic_run_roundtrips_surface_tokens() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_article(src.path(), 1, "Мама мыла раму. Папа пил чай.");

    let corpus = CorpusManager::new(src.path()).unwrap();
    AnnotationPipeline::new(corpus, dst.path()).run().unwrap();

    let content = fs::read_to_string(dst.path().join("1_sentences.conllu")).unwrap();
    let mut forms = Vec::new();
    for line in content.lines().filter(|l| !l.starts_with('#') && !l.is_empty()) {
        let columns: Vec<&str> = line.split('\t').collect();
        assert_eq!(columns.len(), 10);
        forms.push(columns[1].to_string());
        // every annotation column stays a placeholder in the basic variant
        assert!(columns[2..].iter().all(|c| *c == "_"));
    }
    assert_eq!(
        forms,
        vec!["Мама", "мыла", "раму", ".", "Папа", "пил", "чай", "."]
    );
}

#[test]
fn unknown_words_degrade_to_x() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_article(src.path(), 1, "Глокая куздра штеко будланула бокра.");
    run_extended(src.path(), dst.path());

    let content = fs::read_to_string(dst.path().join("1_sentences.conllu")).unwrap();
    let first_token = content
        .lines()
        .find(|l| !l.starts_with('#') && !l.is_empty())
        .unwrap();
    assert_eq!(first_token, "1\tГлокая\tглокая\tX\t_\t_\t_\t_\t_\t_");
}

#[test]
fn reruns_are_byte_identical() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    two_article_corpus(src.path());

    run_extended(src.path(), dst.path());
    let first: BTreeMap<String, Vec<u8>> = snapshot(dst.path());

    run_extended(src.path(), dst.path());
    let second: BTreeMap<String, Vec<u8>> = snapshot(dst.path());

    assert_eq!(first, second);
}

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| {
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect()
}
