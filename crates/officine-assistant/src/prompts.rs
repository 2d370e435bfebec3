//! Prompt templates for the report assistant.
//!
//! The model is addressed in French, with the Togolese context spelled out
//! (FCFA, malaria, Flooz / T-Money).

/// Fixed answer when no API key is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Clé API Gemini non configurée. Veuillez configurer la variable d'environnement API_KEY.";

/// Fixed answer for any transport, status, or parsing failure.
pub const ERROR_MESSAGE: &str =
    "Une erreur est survenue lors de la consultation de l'assistant IA.";

/// Fixed answer when the model returned no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "Aucune réponse générée.";

/// Builds the full prompt from the JSON context and the pharmacist's request.
pub fn make_report_prompt(context_json: &str, request: &str) -> String {
    format!(
        r#"Tu es un assistant expert pour une pharmacie située au Togo.
Le contexte monétaire est le Franc CFA (FCFA).
Prends en compte les réalités locales (pathologies comme le paludisme, moyens de paiement comme Flooz/T-Money).

Voici les données actuelles de la pharmacie en format JSON simplifié :
{}

La demande de l'utilisateur est : "{}"

Réponds de manière professionnelle, concise et utile pour un pharmacien togolais. Si c'est une analyse, donne des chiffres clés.
Formate la réponse en Markdown."#,
        context_json, request
    )
}
