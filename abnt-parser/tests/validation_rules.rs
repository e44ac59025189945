mod common;

use abnt_parser::abnt::document::DocumentRecord;
use abnt_parser::abnt::formats::text::render_report;
use abnt_parser::abnt::validation::{validate, Rule, Severity};
use common::{complete_document, words};
use rstest::rstest;

fn finding_for(doc: &DocumentRecord, rule: Rule) -> Option<(Severity, String)> {
    validate(doc)
        .findings()
        .into_iter()
        .find(|finding| finding.rule == rule)
        .map(|finding| (finding.severity, finding.message.clone()))
}

#[test]
fn complete_fixture_is_clean() {
    let report = validate(&complete_document());
    assert!(!report.is_blocking());
    assert!(report.advisory.is_empty());
    assert_eq!(report.confirmed.len(), 7);
}

#[rstest]
#[case::no_institution(
    |d: &mut DocumentRecord| d.cover.institution.clear(),
    Rule::CoverInstitution, Severity::Blocking, "Instituição não preenchida na capa"
)]
#[case::blank_author(
    |d: &mut DocumentRecord| d.cover.author = "   ".into(),
    Rule::CoverAuthor, Severity::Blocking, "Autor não preenchido na capa"
)]
#[case::no_title(
    |d: &mut DocumentRecord| d.cover.title.clear(),
    Rule::CoverTitle, Severity::Blocking, "Título não preenchido na capa"
)]
#[case::no_city(
    |d: &mut DocumentRecord| d.cover.city.clear(),
    Rule::CoverCity, Severity::Advisory, "Cidade não preenchida na capa"
)]
#[case::no_year(
    |d: &mut DocumentRecord| d.cover.year.clear(),
    Rule::CoverYear, Severity::Advisory, "Ano não preenchido na capa"
)]
#[case::empty_abstract(
    |d: &mut DocumentRecord| d.abstract_pt.text.clear(),
    Rule::AbstractLength, Severity::Blocking, "Resumo não preenchido"
)]
#[case::short_abstract(
    |d: &mut DocumentRecord| d.abstract_pt.text = words(149),
    Rule::AbstractLength, Severity::Advisory, "Resumo muito curto (mínimo 150 palavras recomendado)"
)]
#[case::abstract_at_minimum(
    |d: &mut DocumentRecord| d.abstract_pt.text = words(150),
    Rule::AbstractLength, Severity::Confirmed, "Resumo com tamanho adequado"
)]
#[case::abstract_at_maximum(
    |d: &mut DocumentRecord| d.abstract_pt.text = words(500),
    Rule::AbstractLength, Severity::Confirmed, "Resumo com tamanho adequado"
)]
#[case::long_abstract(
    |d: &mut DocumentRecord| d.abstract_pt.text = words(501),
    Rule::AbstractLength, Severity::Advisory, "Resumo muito longo (máximo 500 palavras recomendado)"
)]
#[case::two_keywords(
    |d: &mut DocumentRecord| { d.abstract_pt.keywords.pop(); },
    Rule::AbstractKeywords, Severity::Advisory, "Mínimo de 3 palavras-chave recomendado"
)]
#[case::blank_keyword_does_not_count(
    |d: &mut DocumentRecord| d.abstract_pt.keywords[0] = " ".into(),
    Rule::AbstractKeywords, Severity::Advisory, "Mínimo de 3 palavras-chave recomendado"
)]
#[case::no_introduction(
    |d: &mut DocumentRecord| d.introduction.clear(),
    Rule::Introduction, Severity::Blocking, "Introdução não preenchida"
)]
#[case::no_sections(
    |d: &mut DocumentRecord| d.body.clear(),
    Rule::Body, Severity::Blocking, "Desenvolvimento não possui seções"
)]
#[case::three_sections(
    |_: &mut DocumentRecord| {},
    Rule::Body, Severity::Confirmed, "3 seções no desenvolvimento"
)]
#[case::no_conclusion(
    |d: &mut DocumentRecord| d.conclusion = "\n\t".into(),
    Rule::Conclusion, Severity::Blocking, "Conclusão não preenchida"
)]
#[case::no_references(
    |d: &mut DocumentRecord| d.references = vec!["".into(), " ".into()],
    Rule::References, Severity::Blocking, "Nenhuma referência adicionada"
)]
#[case::four_references(
    |d: &mut DocumentRecord| d.references.truncate(5),
    Rule::References, Severity::Advisory, "Poucas referências (mínimo 5 recomendado para TCC)"
)]
#[case::five_references(
    |_: &mut DocumentRecord| {},
    Rule::References, Severity::Confirmed, "5 referências cadastradas"
)]
fn single_rule_outcome(
    #[case] mutate: fn(&mut DocumentRecord),
    #[case] rule: Rule,
    #[case] severity: Severity,
    #[case] message: &str,
) {
    let mut doc = complete_document();
    mutate(&mut doc);
    assert_eq!(finding_for(&doc, rule), Some((severity, message.to_string())));
}

#[test]
fn present_cover_fields_produce_no_finding() {
    let doc = complete_document();
    for rule in [
        Rule::CoverInstitution,
        Rule::CoverAuthor,
        Rule::CoverTitle,
        Rule::CoverCity,
    ] {
        assert_eq!(finding_for(&doc, rule), None, "{}", rule);
    }
}

#[test]
fn empty_document_reports_every_gap() {
    let report = validate(&DocumentRecord::default());
    let rules: Vec<Rule> = report.blocking.iter().map(|f| f.rule).collect();
    assert_eq!(
        rules,
        vec![
            Rule::CoverInstitution,
            Rule::CoverAuthor,
            Rule::CoverTitle,
            Rule::AbstractLength,
            Rule::Introduction,
            Rule::Body,
            Rule::Conclusion,
            Rule::References,
        ]
    );
    assert_eq!(report.advisory.len(), 3);
    assert!(report.confirmed.is_empty());
}

#[test]
fn report_text_lists_groups_in_order() {
    let mut doc = complete_document();
    doc.cover.author.clear();
    doc.cover.city.clear();
    doc.references.truncate(3);
    let rendered = render_report(&validate(&doc));
    insta::assert_snapshot!(rendered, @r"
    Problemas Críticos (1)
      ✗ Autor não preenchido na capa

    Avisos (2)
      ! Cidade não preenchida na capa
      ! Poucas referências (mínimo 5 recomendado para TCC)

    Itens Corretos (6)
      ✓ Capa completa
      ✓ Resumo com tamanho adequado
      ✓ Palavras-chave adequadas
      ✓ Introdução presente
      ✓ 3 seções no desenvolvimento
      ✓ Conclusão presente
    ");
}
