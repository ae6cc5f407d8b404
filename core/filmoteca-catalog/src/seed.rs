//! The built-in dataset: a small, hand-authored collection of Spanish
//! films. Ids are stable; cast order is part of the data contract and must
//! not change between releases (actor links encode positions).

use crate::movie::{Actor, Movie};

fn actor(name: &str, biography: &str, photo: &str) -> Actor {
    Actor {
        name: name.into(),
        biography: biography.into(),
        photo_url: photo.into(),
    }
}

pub(crate) fn movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            name: "El laberinto del fauno".into(),
            summary: "In 1944 Spain, young Ofelia escapes the brutality of \
                      her stepfather's post-war garrison into a labyrinth \
                      where a faun sets her three tasks to reclaim her place \
                      as princess of the underworld."
                .into(),
            poster_url: "/img/posters/el-laberinto-del-fauno.jpg".into(),
            classification: "Fantasy drama".into(),
            score: 10,
            actors: vec![
                actor(
                    "Ivana Baquero",
                    "Catalan actress who won the Goya for Best New Actress \
                     at age eleven for her role as Ofelia.",
                    "/img/cast/ivana-baquero.jpg",
                ),
                actor(
                    "Sergi López",
                    "Catalan actor known for intense character roles across \
                     Spanish and French cinema; plays Captain Vidal.",
                    "/img/cast/sergi-lopez.jpg",
                ),
                actor(
                    "Maribel Verdú",
                    "Madrid-born actress with a four-decade career; plays \
                     the housekeeper Mercedes.",
                    "/img/cast/maribel-verdu.jpg",
                ),
            ],
        },
        Movie {
            id: 2,
            name: "Mar adentro".into(),
            summary: "The true story of Ramón Sampedro, left quadriplegic by \
                      a diving accident, and his thirty-year campaign for \
                      the right to end his own life."
                .into(),
            poster_url: "/img/posters/mar-adentro.jpg".into(),
            classification: "Biographical drama".into(),
            score: 9,
            actors: vec![
                actor(
                    "Javier Bardem",
                    "First Spanish actor to win an Academy Award; plays \
                     Ramón Sampedro under heavy prosthetic aging.",
                    "/img/cast/javier-bardem.jpg",
                ),
                actor(
                    "Belén Rueda",
                    "Television presenter turned dramatic actress; her film \
                     debut as the lawyer Julia earned a Goya.",
                    "/img/cast/belen-rueda.jpg",
                ),
            ],
        },
        Movie {
            id: 3,
            name: "Volver".into(),
            summary: "Two sisters from La Mancha deal with the apparent \
                      ghost of their dead mother, a hidden crime, and the \
                      stubborn endurance of family ties."
                .into(),
            poster_url: "/img/posters/volver.jpg".into(),
            classification: "Comedy drama".into(),
            score: 8,
            actors: vec![
                actor(
                    "Penélope Cruz",
                    "Academy Award winner from Alcobendas; her Raimunda \
                     earned the Cannes ensemble acting prize.",
                    "/img/cast/penelope-cruz.jpg",
                ),
                actor(
                    "Carmen Maura",
                    "Veteran of Almodóvar's cinema since the 1980s; plays \
                     the returning mother Irene.",
                    "/img/cast/carmen-maura.jpg",
                ),
                actor(
                    "Lola Dueñas",
                    "Character actress celebrated for warm supporting \
                     roles; plays the credulous sister Sole.",
                    "/img/cast/lola-duenas.jpg",
                ),
            ],
        },
        Movie {
            id: 4,
            name: "Los otros".into(),
            summary: "In a fog-bound Jersey mansion just after the war, a \
                      devout mother keeps her photosensitive children in \
                      darkness while the house fills with intruders only \
                      the children can see."
                .into(),
            poster_url: "/img/posters/los-otros.jpg".into(),
            classification: "Gothic horror".into(),
            score: 7,
            actors: vec![
                actor(
                    "Nicole Kidman",
                    "Australian-American actress; her Grace Stewart anchors \
                     Amenábar's English-language debut.",
                    "/img/cast/nicole-kidman.jpg",
                ),
                actor(
                    "Fionnula Flanagan",
                    "Irish stage and screen veteran; plays the unsettling \
                     housekeeper Mrs. Mills.",
                    "/img/cast/fionnula-flanagan.jpg",
                ),
            ],
        },
    ]
}
