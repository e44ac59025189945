use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const COMPLETE: &str = r####"{
  "tipo": "tcc",
  "capa": {
    "instituicao": "Universidade Federal do Paraná",
    "curso": "Engenharia de Software",
    "autor": "Ana Lima",
    "titulo": "Testes Automatizados",
    "cidade": "Curitiba",
    "ano": 2024
  },
  "resumo": {
    "texto": "PLACEHOLDER",
    "palavras_chave": ["testes", "qualidade", "software"]
  },
  "introducao": "Este trabalho trata de testes.",
  "desenvolvimento": [
    {"titulo": "2 Fundamentação", "nivel": 1, "conteudo": "2.1 Conceitos Gerais. Texto."},
    {"titulo": "2.2 Ferramentas", "nivel": 2, "conteudo": "###IMG###Figura 1###/IMG###"}
  ],
  "conclusao": "Testes ajudam.",
  "referencias": [
    "SOMMERVILLE, I. Engenharia de Software. 2011.",
    "BECK, K. TDD. 2002.",
    "ÁVILA, R. Qualidade. 2015.",
    "MEYER, B. Contratos. 1997.",
    "FOWLER, M. Refatoração. 2018."
  ]
}"####;

fn document_file(json: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn complete_document() -> NamedTempFile {
    let abstract_text = vec!["palavra"; 160].join(" ");
    document_file(&COMPLETE.replace("PLACEHOLDER", &abstract_text))
}

#[test]
fn toc_lists_outline_with_page_numbers() {
    let file = complete_document();
    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("toc").arg(file.path());

    let output = predicate::str::contains("SUMÁRIO")
        .and(predicate::str::contains("1 INTRODUÇÃO"))
        .and(predicate::str::contains("  2 FUNDAMENTAÇÃO"))
        .and(predicate::str::contains("    2.2 Ferramentas"))
        .and(predicate::str::contains(". 3\n"));
    cmd.assert().success().stdout(output);
}

#[test]
fn references_are_sorted() {
    let file = complete_document();
    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("references").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("ÁVILA, R. Qualidade. 2015.\n\nBECK"));
}

#[test]
fn clean_document_passes_check() {
    let file = complete_document();
    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("check").arg(file.path());
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("Itens Corretos (7)"))
        .stdout(predicate::str::contains("Problemas Críticos").not());
}

#[test]
fn blocking_findings_exit_with_two() {
    let file = document_file(r#"{"capa": {"titulo": "Só o título"}}"#);
    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("check").arg(file.path());
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("Introdução não preenchida"));
}

#[test]
fn json_format_is_global() {
    let file = complete_document();
    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("--format").arg("json").arg("check").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"confirmed\""))
        .stdout(predicate::str::contains("\"rule\": \"abstract-length\""));
}

#[test]
fn stats_use_config_file() {
    let file = complete_document();
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[stats]\nwords_per_page = 10").unwrap();

    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("stats")
        .arg(file.path())
        .arg("--config")
        .arg(config.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Páginas estimadas: 18"));
}

#[test]
fn tokenize_lists_nodes() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "3 Resultados Obtidos. Os dados.\n###FORMULA###E = mc^2###/FORMULA###\n"
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("tokenize").arg(file.path());
    cmd.assert()
        .success()
        .stdout("§ 3 Resultados Obtidos.\n¶ Os dados.\n√ E = mc^2\n");
}

#[test]
fn null_references_and_levels_still_load() {
    let file = document_file(
        r#"{"desenvolvimento": [{"titulo": "2 Base", "nivel": null}], "referencias": ["A", null, ""]}"#,
    );
    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("references").arg(file.path());
    cmd.assert().success().stdout("A\n");

    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("toc").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  2 BASE"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("pages").arg("/nonexistent/tcc.json");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/tcc.json"));
}

#[test]
fn invalid_section_level_fails() {
    let file = document_file(r#"{"desenvolvimento": [{"titulo": "X", "nivel": 7}]}"#);
    let mut cmd = cargo_bin_cmd!("abnt");
    cmd.arg("pages").arg(file.path());
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("section 0 has level 7"));
}
