//! Euclidean vector algebra.
//!
//! Operands may be vectors, lists, or intervals of real-valued numbers.
//! Results are vectors of reals, except `Vec` itself, which keeps its
//! components as given.

use mathlang_runtime::{
    argument_error, expected_type, Environment, EvalError, EvalResult, Executor, Operation,
    Provider, Scalar, Value,
};

use super::{integer, number, Collection};

pub struct VectorsProvider;

impl Provider for VectorsProvider {
    fn name(&self) -> &'static str {
        "Vectors"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("Vec", "Create Vector", "Vectors/Creation", vec_)
                .with_description("Creates a vector from numeric components")
                .variadic("components", "Vector components"),
            Operation::new("ZeroVec", "Zero Vector", "Vectors/Creation", zero_vec)
                .with_description("Creates a zero vector of the given dimension")
                .required("dim", "Dimension of the vector"),
            Operation::new("UnitVec", "Unit Vector", "Vectors/Creation", unit_vec)
                .with_description("Creates a unit vector along an axis")
                .required("dim", "Dimension of the vector")
                .required("axis", "Axis index (0-based)"),
            Operation::new("VecFromList", "Vector from List", "Vectors/Creation", vec_from_list)
                .with_description("Creates a vector from a list of numbers")
                .required("list", "List of numbers"),
            Operation::new("DotProduct", "Dot Product", "Vectors/Products", dot_product)
                .with_description("Returns the dot product of two vectors")
                .required("v1", "First vector")
                .required("v2", "Second vector"),
            Operation::new("CrossProduct", "Cross Product", "Vectors/Products", cross_product)
                .with_description("Returns the cross product of two 3D vectors")
                .required("v1", "First 3D vector")
                .required("v2", "Second 3D vector"),
            Operation::new("Magnitude", "Magnitude", "Vectors/Properties", magnitude)
                .with_description("Returns the length (magnitude) of a vector")
                .required("v", "The vector"),
            Operation::new("Normalize", "Normalize", "Vectors/Properties", normalize)
                .with_description("Returns the unit vector in the same direction")
                .required("v", "The vector"),
            Operation::new("VecAngle", "Angle Between Vectors", "Vectors/Properties", vec_angle)
                .with_description("Returns the angle between two vectors in radians")
                .required("v1", "First vector")
                .required("v2", "Second vector"),
            Operation::new("Projection", "Vector Projection", "Vectors/Products", projection)
                .with_description("Projects v1 onto v2")
                .required("v1", "Vector to project")
                .required("v2", "Vector to project onto"),
            Operation::new("VecAdd", "Vector Add", "Vectors/Arithmetic", vec_add)
                .with_description("Adds two vectors component-wise")
                .required("v1", "First vector")
                .required("v2", "Second vector"),
            Operation::new("VecSub", "Vector Subtract", "Vectors/Arithmetic", vec_sub)
                .with_description("Subtracts two vectors component-wise")
                .required("v1", "First vector")
                .required("v2", "Second vector"),
            Operation::new("VecScale", "Vector Scale", "Vectors/Arithmetic", vec_scale)
                .with_description("Multiplies a vector by a scalar")
                .required("v", "The vector")
                .required("scalar", "The scalar multiplier"),
            Operation::new("VecDim", "Vector Dimension", "Vectors/Properties", vec_dim)
                .with_description("Returns the number of components of a vector")
                .required("v", "The vector"),
            Operation::new("VecComponent", "Vector Component", "Vectors/Access", vec_component)
                .with_description("Returns one component of a vector (0-based)")
                .required("v", "The vector")
                .required("index", "Component index (0-based)"),
        ]
    }
}

fn components(op: &str, value: &Value) -> Result<Vec<f64>, EvalError> {
    Collection::from_value(op, value)
        .map_err(|_| expected_type(op, "a vector", &value.type_name()))?
        .numbers(op)
}

fn same_dimension(a: &[f64], b: &[f64]) -> Result<(), EvalError> {
    if a.len() != b.len() {
        return Err(argument_error(format!(
            "Vectors must have same dimension: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn vec_(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let mut items = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Scalar(s @ (Scalar::Int(_) | Scalar::Real(_) | Scalar::Complex(_))) => {
                items.push(s.clone());
            }
            other => {
                return Err(expected_type(
                    "Vec",
                    "numeric components",
                    &other.type_name(),
                ))
            }
        }
    }
    Ok(Value::vector(items))
}

fn vec_from_list(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real_vector(components("VecFromList", &args[0])?))
}

fn dot_product(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let a = components("DotProduct", &args[0])?;
    let b = components("DotProduct", &args[1])?;
    same_dimension(&a, &b)?;
    Ok(Value::real(a.iter().zip(&b).map(|(x, y)| x * y).sum::<f64>()))
}

fn cross_product(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let a = components("CrossProduct", &args[0])?;
    let b = components("CrossProduct", &args[1])?;
    let ([a0, a1, a2], [b0, b1, b2]) = (a.as_slice(), b.as_slice()) else {
        return Err(argument_error("Cross product requires 3D vectors"));
    };
    Ok(Value::real_vector([
        a1 * b2 - a2 * b1,
        a2 * b0 - a0 * b2,
        a0 * b1 - a1 * b0,
    ]))
}

fn magnitude(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(norm(&components("Magnitude", &args[0])?)))
}

fn normalize(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let v = components("Normalize", &args[0])?;
    let mag = norm(&v);
    if mag == 0.0 {
        return Err(argument_error("Cannot normalize zero vector"));
    }
    Ok(Value::real_vector(v.into_iter().map(|x| x / mag)))
}

fn vec_add(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let a = components("VecAdd", &args[0])?;
    let b = components("VecAdd", &args[1])?;
    same_dimension(&a, &b)?;
    Ok(Value::real_vector(a.iter().zip(&b).map(|(x, y)| x + y)))
}

fn vec_sub(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let a = components("VecSub", &args[0])?;
    let b = components("VecSub", &args[1])?;
    same_dimension(&a, &b)?;
    Ok(Value::real_vector(a.iter().zip(&b).map(|(x, y)| x - y)))
}

fn vec_scale(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let v = components("VecScale", &args[0])?;
    let s = number("VecScale", &args[1])?;
    Ok(Value::real_vector(v.into_iter().map(|x| x * s)))
}

fn vec_dim(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let v = Collection::from_value("VecDim", &args[0])
        .map_err(|_| expected_type("VecDim", "a vector", &args[0].type_name()))?;
    Ok(Value::int(v.len() as i64))
}

fn dimension(op: &str, value: &Value) -> Result<usize, EvalError> {
    let dim = integer(op, value)?;
    match usize::try_from(dim) {
        Ok(d) if d > 0 => Ok(d),
        _ => Err(argument_error(format!("Dimension must be positive, got {dim}"))),
    }
}

fn zero_vec(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let dim = dimension("ZeroVec", &args[0])?;
    Ok(Value::real_vector(vec![0.0; dim]))
}

fn unit_vec(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let dim = dimension("UnitVec", &args[0])?;
    let axis = integer("UnitVec", &args[1])?;
    let Some(axis) = usize::try_from(axis).ok().filter(|&a| a < dim) else {
        return Err(argument_error(format!("Axis {axis} out of range for dimension {dim}")));
    };
    let mut v = vec![0.0; dim];
    v[axis] = 1.0;
    Ok(Value::real_vector(v))
}

/// Clamped so rounding never pushes the cosine outside [-1, 1].
fn vec_angle(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let a = components("VecAngle", &args[0])?;
    let b = components("VecAngle", &args[1])?;
    same_dimension(&a, &b)?;
    let (mag_a, mag_b) = (norm(&a), norm(&b));
    if mag_a == 0.0 || mag_b == 0.0 {
        return Err(argument_error("Cannot calculate angle with zero vector"));
    }
    let dot: f64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
    Ok(Value::real((dot / (mag_a * mag_b)).clamp(-1.0, 1.0).acos()))
}

fn projection(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let a = components("Projection", &args[0])?;
    let b = components("Projection", &args[1])?;
    same_dimension(&a, &b)?;
    let onto: f64 = b.iter().map(|x| x * x).sum();
    if onto == 0.0 {
        return Err(argument_error("Cannot project onto zero vector"));
    }
    let scale = a.iter().zip(&b).map(|(x, y)| x * y).sum::<f64>() / onto;
    Ok(Value::real_vector(b.into_iter().map(|x| x * scale)))
}

fn vec_component(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let v = components("VecComponent", &args[0])?;
    let index = integer("VecComponent", &args[1])?;
    usize::try_from(index)
        .ok()
        .and_then(|i| v.get(i))
        .map(|&x| Value::real(x))
        .ok_or_else(|| {
            argument_error(format!(
                "Index {index} out of range for vector of dimension {}",
                v.len()
            ))
        })
}
