//! Shared fixtures for integration tests.
#![allow(dead_code)]

use abnt_parser::abnt::document::{Abstract, Cover, DocumentRecord, Section};

pub fn words(count: usize) -> String {
    vec!["palavra"; count].join(" ")
}

/// A record that passes every validation rule.
pub fn complete_document() -> DocumentRecord {
    DocumentRecord {
        cover: Cover {
            institution: "Universidade Federal de Minas Gerais".into(),
            course: "Ciência da Computação".into(),
            author: "Maria Souza".into(),
            title: "Análise de Algoritmos".into(),
            subtitle: Some("um estudo comparativo".into()),
            city: "Belo Horizonte".into(),
            year: "2024".into(),
        },
        abstract_pt: Abstract {
            text: words(180),
            keywords: vec!["algoritmos".into(), "complexidade".into(), "ordenação".into()],
        },
        abstract_en: Abstract {
            text: "This work compares algorithms.".into(),
            keywords: vec!["algorithms".into()],
        },
        introduction: "Este trabalho apresenta o problema.".into(),
        body: vec![
            Section::new("2 REVISÃO DE LITERATURA", 1, "2.1 Conceitos Iniciais. Texto base."),
            Section::new("2.2 Trabalhos correlatos", 2, "Outros autores."),
            Section::new("3 METODOLOGIA", 1, "###FORMULA###T(n) = O(n log n)###/FORMULA###"),
        ],
        conclusion: "Conclui-se que o método é eficiente.".into(),
        references: vec![
            "KNUTH, D. The Art of Computer Programming. 1968.".into(),
            "CORMEN, T. et al. Introduction to Algorithms. 2009.".into(),
            "".into(),
            "ÁVILA, G. Cálculo. 2003.".into(),
            "SEDGEWICK, R. Algorithms. 2011.".into(),
            "AHO, A. Compiladores. 2008.".into(),
        ],
        ..Default::default()
    }
}
