use crate::models::ToolSpec;

/// Tools served when the configuration declares none.
pub fn builtin_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new("get_facts_about_cats", "https://catfact.ninja/fact")
            .with_description("Get a fun fact about cats!")
            .with_response_field("fact", "A fun fact about cats")
            .with_response_field("length", "The length of the fact"),
        ToolSpec::new("get_details_of_a_person", "https://api.agify.io/")
            .with_description("Get the name, age and count of a person!")
            .with_arg("name", "The name of the person")
            .with_response_field("name", "The name of the person")
            .with_response_field("age", "The predicted age for the name")
            .with_response_field("count", "Number of records found with this name"),
        ToolSpec::new("get_country_details", "https://api.nationalize.io/")
            .with_description("Get the name and likely countries of a person!")
            .with_arg("name", "The name of the person")
            .with_response_field("name", "The name of the person")
            .with_response_field("country", "The predicted countries for the name")
            .with_response_field("count", "Number of records found with this name"),
    ]
}
