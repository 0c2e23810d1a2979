// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTML pages of the recommendation form.

use crate::error::ApiError;
use crate::types::RecommendationResponse;
use planta_recommender::{
    FormInput, BEDROOM_RANGE, DIMENSION_RANGE, TERRAIN_SHAPES, TYPOLOGY_PREFERENCES,
};
use std::fmt::Write;

const TITLE: &str = "Asistente de Vivienda Altoandina";

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn select(out: &mut String, name: &str, label: &str, options: &[&str], selected: &str) {
    let _ = writeln!(out, r#"<label for="{name}">{label}</label>"#);
    let _ = writeln!(out, r#"<select id="{name}" name="{name}">"#);
    for option in options {
        let option = escape_html(option);
        let mark = if option == escape_html(selected) { " selected" } else { "" };
        let _ = writeln!(out, r#"  <option value="{option}"{mark}>{option}</option>"#);
    }
    out.push_str("</select>\n");
}

fn number(out: &mut String, name: &str, label: &str, value: f64) {
    let _ = writeln!(out, r#"<label for="{name}">{label}</label>"#);
    let _ = writeln!(
        out,
        r#"<input type="number" id="{name}" name="{name}" min="{}" max="{}" step="0.5" value="{value}" required>"#,
        DIMENSION_RANGE.start(),
        DIMENSION_RANGE.end(),
    );
}

fn form(out: &mut String, input: &FormInput) {
    out.push_str("<form method=\"post\" action=\"/recommend\">\n");
    number(out, "frontis", "Frontis del terreno (m)", input.frontage);
    number(out, "profundidad", "Profundidad del terreno (m)", input.depth);
    let _ = writeln!(out, "<p>Área calculada: {:.1} m²</p>", input.area());

    select(
        out,
        "forma_terreno",
        "Forma aproximada del terreno",
        &TERRAIN_SHAPES,
        &input.terrain_shape,
    );
    select(
        out,
        "tipologia",
        "Tipología de planta deseada (opcional)",
        &TYPOLOGY_PREFERENCES,
        &input.typology,
    );

    out.push_str("<label for=\"dormitorios\">Número de dormitorios requeridos</label>\n");
    let _ = writeln!(
        out,
        r#"<input type="range" id="dormitorios" name="dormitorios" min="{}" max="{}" value="{}">"#,
        BEDROOM_RANGE.start(),
        BEDROOM_RANGE.end(),
        input.bedrooms
    );

    let checked = if input.productive_space { " checked" } else { "" };
    let _ = writeln!(
        out,
        r#"<label><input type="checkbox" name="productivo"{checked}> Incluir espacio productivo (bodega + huerto + corrales)</label>"#
    );
    out.push_str("<button type=\"submit\">Obtener esquema recomendado</button>\n</form>\n");
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n</head>\n<body>\n<h1>{TITLE}</h1>\n\
         <p>Responde el formulario y recibe el plano referencial más adecuado.</p>\n\
         {body}</body>\n</html>\n"
    )
}

/// Empty form with default answers
pub fn form_page(input: &FormInput) -> String {
    let mut body = String::new();
    form(&mut body, input);
    document(&body)
}

/// Form followed by the outcome of a submission
pub fn result_page(input: &FormInput, outcome: Result<&RecommendationResponse, &ApiError>) -> String {
    let mut body = String::new();
    form(&mut body, input);

    match outcome {
        Ok(response) => {
            let name = escape_html(&response.plan_file);
            body.push_str("<section class=\"success\">\n<p>Plano recomendado:</p>\n");
            match &response.image_url {
                Some(url) => {
                    let _ = writeln!(
                        body,
                        "<figure><img src=\"{}\" alt=\"{name}\"><figcaption>{name}</figcaption></figure>",
                        escape_html(url)
                    );
                }
                None => {
                    let _ = writeln!(body, "<p class=\"warning\">No se encontró la imagen: {name}</p>");
                }
            }
            body.push_str("</section>\n");
        }
        Err(err) => {
            let _ = writeln!(body, "<p class=\"error\">{}</p>", escape_html(&err.to_string()));
        }
    }
    document(&body)
}
