use polymirror::*;
use std::error::Error;

pub use serde_json;

/// This is essentially `try_into` then `try_map` but the latter is nightly-only
pub fn json_array_to_float_array<const D: usize>(
    json_array: &[serde_json::Value],
) -> Option<[Float; D]> {
    let array: &[serde_json::Value; D] = json_array.try_into().ok()?;

    let mut coords = [0.; D];
    for (coord, value) in coords.iter_mut().zip(array) {
        *coord = value.as_f64()?;
    }
    Some(coords)
}

pub fn json_array_to_point(json_array: &[serde_json::Value]) -> Option<Point> {
    json_array_to_float_array(json_array).map(Point::from)
}

pub fn map_json_array<C: FromIterator<T>, T>(
    json: &serde_json::Value,
    map: impl FnMut(&serde_json::Value) -> Result<T, Box<dyn Error>>,
) -> Result<C, Box<dyn Error>> {
    json.as_array()
        .ok_or("json value must be an array")?
        .iter()
        .map(map)
        .collect()
}

pub trait JsonSer {
    /// Serialize `self` into a JSON object.
    fn to_json(&self) -> serde_json::Value;
}

impl<T: JsonSer> JsonSer for [T] {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(Vec::from_iter(self.iter().map(T::to_json)))
    }
}

impl<T: JsonSer> JsonSer for Vec<T> {
    fn to_json(&self) -> serde_json::Value {
        self.as_slice().to_json()
    }
}

pub trait JsonDes {
    /// Deserialize from a JSON object.
    ///
    /// Returns an error if `json`'s format or values are invalid.
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>>
    where
        Self: Sized;
}

impl<T: JsonDes> JsonDes for Vec<T> {
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        map_json_array(json, T::from_json)
    }
}

impl JsonSer for Point {
    /// `[x, y]`, non-finite coordinates become `null`
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!([self.x, self.y])
    }
}

impl JsonDes for Point {
    /// Deserialize a point from an array of two numbers: `[x, y]`
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        json.as_array()
            .map(Vec::as_slice)
            .and_then(json_array_to_point)
            .ok_or_else(|| "a point must be an array of 2 numbers".into())
    }
}

impl JsonSer for Polynomial {
    /// The coefficients, highest degree first.
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self.coefficients())
    }
}

impl JsonDes for Polynomial {
    /// Deserialize a polynomial from its coefficients, highest degree first.
    ///
    /// ```json
    /// [0.5, 0., -1.] // 0.5 x^2 - 1
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        let coeffs: Vec<Float> = map_json_array(json, |value| {
            value
                .as_f64()
                .ok_or_else(|| "polynomial coefficients must be numbers".into())
        })?;

        Ok(Polynomial::try_new(coeffs)?)
    }
}

impl JsonSer for Scene {
    /// The format of the returned object is explained in [`Self::from_json`]
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "source": self.source.to_json(),
            "camera": self.camera.to_json(),
            "mirror": self.mirror.to_json(),
            "guess": self.guess,
        })
    }
}

impl JsonDes for Scene {
    /// Deserialize a scene from a JSON object.
    ///
    /// The JSON object must follow the following format:
    ///
    /// ```json
    /// {
    ///     "source": [-5., 5.],
    ///     "camera": [5., 5.],
    ///     "mirror": [0., 0.], // (coefficients, highest degree first)
    ///     "guess": 0.,        // (optional, defaults to 0)
    /// }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        let source = Point::from_json(json.get("source").ok_or("Missing scene source")?)
            .map_err(|e| format!("Invalid scene source: {e}"))?;

        let camera = Point::from_json(json.get("camera").ok_or("Missing scene camera")?)
            .map_err(|e| format!("Invalid scene camera: {e}"))?;

        let mirror = Polynomial::from_json(json.get("mirror").ok_or("Missing scene mirror")?)
            .map_err(|e| format!("Invalid scene mirror: {e}"))?;

        let guess = match json.get("guess") {
            None => 0.,
            Some(value) => value.as_f64().ok_or("guess must be a number")?,
        };

        Ok(Scene::new(source, camera, mirror, guess))
    }
}

pub fn serialize_scenes(scenes: &[Scene]) -> serde_json::Value {
    serde_json::json!({ "scenes": scenes.to_json() })
}

pub fn deserialize_scenes(json: &serde_json::Value) -> Result<Vec<Scene>, Box<dyn Error>> {
    let scenes = Vec::<Scene>::from_json(json.get("scenes").ok_or("scenes field expected")?)?;

    log::debug!("parsed {} scene(s)", scenes.len());

    Ok(scenes)
}

/// The result of searching `scene` for a reflection point.
///
/// ```json
/// {
///     "scene": { ... },
///     "point": [1., 2.],            // (null if the search broke down)
///     "history": [[0., 0.3], ...], // (every (x, g(x)) pair evaluated)
///     "error": 1e-12,              // (see `polymirror::reflection_error`, null if unavailable)
/// }
/// ```
pub fn serialize_reflection(scene: &Scene, reflection: &Reflection) -> serde_json::Value {
    let point = if reflection.is_degenerate() {
        serde_json::Value::Null
    } else {
        reflection.point.to_json()
    };

    serde_json::json!({
        "scene": scene.to_json(),
        "point": point,
        "history": reflection.history.as_slice(),
        "error": scene.check(reflection),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flat() -> Polynomial {
        Polynomial::try_new([0., 0.]).unwrap()
    }

    #[test]
    fn scene_from_json() {
        let scene = Scene::from_json(&json!({
            "source": [-5, 5],
            "camera": [5., 5.],
            "mirror": [0.5, 0, -1],
            "guess": 0.25,
        }))
        .unwrap();

        assert_eq!(scene.source, Point::new(-5., 5.));
        assert_eq!(scene.camera, Point::new(5., 5.));
        assert_eq!(scene.mirror.coefficients(), [0.5, 0., -1.]);
        assert_eq!(scene.guess, 0.25);
    }

    #[test]
    fn guess_defaults_to_zero() {
        let scene = Scene::from_json(&json!({
            "source": [-1, 1],
            "camera": [1, 1],
            "mirror": [0],
        }))
        .unwrap();

        assert_eq!(scene.guess, 0.);
    }

    #[test]
    fn invalid_scenes_are_rejected() {
        for json in [
            json!({ "camera": [1, 1], "mirror": [0] }),
            json!({ "source": [1], "camera": [1, 1], "mirror": [0] }),
            json!({ "source": [1, 1, 1], "camera": [1, 1], "mirror": [0] }),
            json!({ "source": [0, 1], "camera": ["a", 1], "mirror": [0] }),
            json!({ "source": [0, 1], "camera": [1, 1], "mirror": [] }),
            json!({ "source": [0, 1], "camera": [1, 1], "mirror": [1, null] }),
            json!({ "source": [0, 1], "camera": [1, 1], "mirror": 3 }),
            json!({ "source": [0, 1], "camera": [1, 1], "mirror": [0], "guess": "0" }),
        ] {
            assert!(Scene::from_json(&json).is_err(), "{json}");
        }
    }

    #[test]
    fn empty_mirror_error_mentions_coefficients() {
        let err = Scene::from_json(&json!({
            "source": [0, 1],
            "camera": [1, 1],
            "mirror": [],
        }))
        .unwrap_err();

        assert!(err.to_string().contains("coefficient"), "{err}");
    }

    #[test]
    fn scene_file_round_trip() {
        let scenes = vec![
            Scene::new([-5., 5.], [5., 5.], flat(), 0.),
            Scene::new(
                [-1., 4.],
                [2., 3.],
                Polynomial::try_new([0.02, -0.1, 0.2, 0.]).unwrap(),
                0.5,
            ),
        ];

        let json = serialize_scenes(&scenes);
        assert_eq!(json["scenes"].as_array().map(Vec::len), Some(2));
        assert_eq!(deserialize_scenes(&json).unwrap(), scenes);
    }

    #[test]
    fn scene_lists_as_arrays() {
        let scenes = vec![
            Scene::new([-3., 4.], [5., 2.], flat(), 0.5),
            Scene::new([-1., 1.], [1., 1.], Polynomial::try_new([2.]).unwrap(), 0.),
        ];

        let json = scenes.to_json();
        assert_eq!(json, scenes.as_slice().to_json());
        assert_eq!(json[1]["mirror"], json!([2.]));
        assert_eq!(Vec::<Scene>::from_json(&json).unwrap(), scenes);

        assert!(Vec::<Scene>::from_json(&json!({ "scenes": [] })).is_err());
        assert!(Vec::<Scene>::from_json(&json!([{ "source": [0, 1] }])).is_err());
    }

    #[test]
    fn missing_scenes_field() {
        assert!(deserialize_scenes(&json!({ "scene": [] })).is_err());
        assert!(deserialize_scenes(&json!({ "scenes": [] })).unwrap().is_empty());
    }

    #[test]
    fn reflection_result() {
        let scene = Scene::new([-5., 5.], [5., 5.], flat(), 0.);
        let json = serialize_reflection(&scene, &scene.locate());

        let point = Point::from_json(&json["point"]).unwrap();
        assert!(point.coords.norm() < 1e-9);
        assert_eq!(json["history"].as_array().map(Vec::len), Some(HISTORY_CAPACITY));
        assert!(json["error"].as_f64().unwrap() < 1e-9);
        assert_eq!(json["scene"], scene.to_json());
    }

    #[test]
    fn broken_reflection_serializes_nulls() {
        let scene = Scene::new([-5., 5.], [5., 5.], flat(), f64::NAN);
        let json = serialize_reflection(&scene, &scene.locate());

        assert!(json["point"].is_null());
        assert!(json["error"].is_null());
        assert!(json["scene"]["guess"].is_null());
    }
}
