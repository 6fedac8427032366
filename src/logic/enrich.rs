use futures::future::try_join_all;

use crate::model::{EnrichedPerson, Movie, Person};
use crate::upstream::{UpstreamApi, UpstreamResult};

/// Resolve every film reference of `person` and build the served record.
///
/// Film lookups run concurrently; `movies` keeps the order of `person.films`.
/// The first failed lookup fails the whole record.
pub async fn enrich_person<U>(upstream: &U, person: Person) -> UpstreamResult<EnrichedPerson>
where
    U: UpstreamApi + ?Sized,
{
    let movies = try_join_all(
        person
            .films
            .iter()
            .map(|film_url| async move { upstream.get_film(film_url).await.map(Movie::from) }),
    )
    .await?;

    Ok(EnrichedPerson {
        id: person.id(),
        name: person.name,
        birth_year: person.birth_year,
        gender: person.gender,
        height: person.height,
        weight: person.mass,
        movies,
    })
}

/// Enrich a whole result list concurrently, all or nothing
pub async fn enrich_people<U>(upstream: &U, people: Vec<Person>) -> UpstreamResult<Vec<EnrichedPerson>>
where
    U: UpstreamApi + ?Sized,
{
    try_join_all(people.into_iter().map(|person| enrich_person(upstream, person))).await
}
